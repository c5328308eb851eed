//! Ambient flavor text, re-rolled every few seconds of active play

use rand::Rng;

/// Line shown in red instead of white
pub const SMILEY: &str = ":)";

pub const LINES: &[&str] = &[
    SMILEY,
    "Dodge the bullets and survive as long as you can!",
    "Use arrow keys to move yourself.",
    "Good luck, and have fun!",
    "The bullets are getting faster!",
    "Stay sharp, the challenge increases!",
    "Can you beat your high score? (no)",
    "Keep going, you're doing great! (lie)",
    "Watch out for the lasers!",
    "Every second counts in Bullet Hell!",
    "This isn't like Undertale, you can't fight back!",
    "Remember, it's just a game. Have fun! (jk)",
    "Pro tip: Moving towards bullets can help dodge bullets.",
    "If you can read this, you're doing well!",
    "Try to survive for 5 minutes!",
    "The longer you survive, the harder it gets!",
    "Don't forget to take breaks! (but leave it running)",
    "You're a star at dodging bullets! (there arent stars)",
    "Practice makes perfect! (poggers)",
    "This doesn't really compare to Touhou, but it's fun!",
    "Feel free to suggest new bullet patterns!",
    "Remember to breathe and relax!",
    "You can do this, just keep dodging!",
    "Every bullet you dodge is a victory!",
    "Stay focused, and you'll go far!",
    "You're not just playing, you're mastering the art of dodging!",
    "Keep your reflexes sharp!",
    "Believe in yourself, you can do it!",
    "If you can dodge a wrench, you can dodge a bullet.",
    "Y u try?",
    "Is this bullet hell or bullet heaven?",
    "Dodging bullets is my cardio.",
    "My bullets, my rules.",
    "You call that dodging?",
    "Too slow!",
    "Is that all you've got?",
    "You can't hide forever!",
    "You're making this too easy!",
    "Come on, show me what you've got!",
    "This is just the beginning!",
    "Prepare to be overwhelmed!",
    "Your skills are impressive, but not enough!",
    "I could do this all day!",
    "You're in my world now!",
    "Let's see how long you can last!",
    "Every second you survive, I get stronger!",
    "You think you can outlast me?",
    "This is my domain!",
    "You can't win, but you can try!",
    "The harder you try, the more bullets you'll face!",
    "You may have dodged this time, but not next time!",
    "I admire your persistence!",
    "Persistence won't save you!",
    "You're just delaying the inevitable!",
    "E",
    "Stay determined!",
    "Skissue",
    "This is getting intense, isn't it?",
    "Keep your head in the game!",
    "You're doing better than I expected!",
    "The bullets are getting faster, just like your heart rate!",
    "Yes im self aware, and will actively break the 4th wall.",
    "Get dunked on!!!",
    "Who gave me a GUN?",
    "Blep",
    "Alt F4 for instant win.",
    "Prepare to be overstimulated!",
];

/// Uniform pick from the pool
pub fn pick_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LINES[rng.random_range(0..LINES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            assert!(LINES.contains(&pick_line(&mut rng)));
        }
    }
}
