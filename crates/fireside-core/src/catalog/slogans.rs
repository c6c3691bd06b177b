//! Rotating home-screen slogans

use rand::Rng;

/// Taglines shown under the logo; one is picked at home-screen mount
pub const SLOGANS: [&str; 15] = [
    "Music made for this moment",
    "A sound built for right now",
    "Instant music to match the feeling",
    "Turn the mood of the moment into music",
    "Your vibe, turned into a track",
    "Music generated to fit the atmosphere",
    "Record your moment as music",
    "A melody cut to fit the moment",
    "Make the beat you need, now",
    "One touch, the music of right now",
    "This feeling, straight into music",
    "Instant sound to fill the present",
    "Custom music for the situation",
    "An OST for the scene you're in",
    "Music produced to match the emotion",
];

/// Pick a random slogan for this session.
pub fn random_slogan() -> &'static str {
    SLOGANS[rand::rng().random_range(0..SLOGANS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_slogan_comes_from_table() {
        for _ in 0..32 {
            assert!(SLOGANS.contains(&random_slogan()));
        }
    }
}
