//! # NemisUz Gemini Bot
//!
//! A Telegram webhook bot for German learners: menu commands get canned
//! replies, everything else is answered by Google Gemini.

pub mod bot;
pub mod completion;
pub mod config;
pub mod errors;
pub mod markup;
pub mod messenger;
pub mod server;
