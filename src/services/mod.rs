// Service module exports
// Leaves first: geometry and state feed the layout composer, the card
// drives everything per tick.

pub mod calendar_fetch;
pub mod card;
pub mod classifier;
pub mod clock;
pub mod dial;
pub mod layout;
pub mod normalizer;
pub mod settings;
