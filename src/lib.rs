//! holdem-advisor: Texas Hold'em decision support
//!
//! Goals:
//! - Deterministic, fast evaluation of 5 to 7 card hands
//! - Monte Carlo equity against random opponents, reproducible with a seed
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_advisor::cards::{Card, Rank, Suit};
//! use holdem_advisor::evaluator::{evaluate_holdem, Category};
//! use holdem_advisor::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! );
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let score = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(score.category(), Category::Pair);
//! ```
//!
//! ## Quick start: ask for advice
//! ```
//! use holdem_advisor::advisor::{Advisor, AdvisorConfig};
//! use holdem_advisor::snapshot::HandSnapshot;
//!
//! let hero = "Kh Qh".parse().unwrap();
//! let board = "Jh Th 2c".parse().unwrap();
//! let snapshot = HandSnapshot {
//!     main_pot: 120,
//!     opponent_bets: vec![60],
//!     stack: 900,
//!     ..HandSnapshot::new(hero, &board)
//! };
//! let report = Advisor::new(AdvisorConfig::default().with_seed(3)).calculate(&snapshot).unwrap();
//! println!("{report}");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-advisor -- --hero "As Kd" --board "Qh 7c 2d" --main-pot 100 --opponent-bets 40
//! ```

pub mod advice;
pub mod advisor;
pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod features;
pub mod hand;
pub mod lookup;
pub mod snapshot;
pub mod texture;

pub use advisor::{AdviceReport, Advisor, AdvisorConfig, AdvisorError};
pub use evaluator::{evaluate, HandScore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
