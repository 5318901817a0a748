//! Renderer collaborators over the finished vocabulary model
//!
//! Every renderer consumes the model read-only and reproduces the input
//! layout by walking the display sequence.

pub mod mediawiki;
pub mod owl;
pub mod textile;
pub mod traits;

pub use mediawiki::MediaWikiGenerator;
pub use owl::OwlGenerator;
pub use textile::TextileGenerator;
pub use traits::Generator;
