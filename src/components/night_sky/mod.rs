//! Starry night backdrop.
//!
//! Lays out a deterministic field of stars and bubbles for the current
//! viewport and renders it behind page content:
//! - Stars keep a minimum spacing via seeded rejection sampling, and a share
//!   of them twinkle
//! - Bubbles are scattered freely and drift on long CSS animations
//! - Both fields are pure functions of the viewport size, so the same size
//!   always yields the same sky
//! - Resizes are debounced and regenerate the sky once per burst
//!
//! # Example
//!
//! ```ignore
//! use night_sky::StarryNightSky;
//!
//! view! {
//!     <StarryNightSky>
//!         <h1>"Hello"</h1>
//!     </StarryNightSky>
//! }
//! ```

mod bubbles;
mod component;
pub mod config;
mod particles;
pub mod random;
pub mod render;
mod state;
mod stars;
pub mod theme;
mod types;
pub mod viewport;

pub use bubbles::{generate_bubbles, generate_bubbles_with};
pub use component::StarryNightSky;
pub use config::{BubbleCount, BubblesConfig, SkyConfig, Spread, StarsConfig, TwinkleConfig};
pub use particles::{Bubble, ParticleField, Star, Twinkle};
pub use random::seeded_random;
pub use stars::{generate_stars, generate_stars_with};
pub use state::SkyState;
pub use theme::SkyTheme;
pub use types::Viewport;
pub use viewport::{ResizeDebouncer, ViewportTracker};
