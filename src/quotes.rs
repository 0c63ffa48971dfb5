use crate::models::QuoteOfDay;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub static QUOTES: [Quote; 15] = [
    Quote {
        text: "The only bad workout is the one that didn't happen.",
        author: "Unknown",
    },
    Quote {
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
    },
    Quote {
        text: "Fitness is not about being better than someone else. It's about being better than you used to be.",
        author: "Khloe Kardashian",
    },
    Quote {
        text: "The groundwork for all happiness is good health.",
        author: "Leigh Hunt",
    },
    Quote {
        text: "Your body can stand almost anything. It's your mind that you have to convince.",
        author: "Unknown",
    },
    Quote {
        text: "Success isn't always about greatness. It's about consistency.",
        author: "Dwayne Johnson",
    },
    Quote {
        text: "The only way to finish is to start.",
        author: "Unknown",
    },
    Quote {
        text: "Don't wish for a good body, work for it.",
        author: "Unknown",
    },
    Quote {
        text: "Sweat is fat crying.",
        author: "Unknown",
    },
    Quote {
        text: "You don't have to be extreme, just consistent.",
        author: "Unknown",
    },
    Quote {
        text: "A one hour workout is 4% of your day. No excuses.",
        author: "Unknown",
    },
    Quote {
        text: "Exercise is a celebration of what your body can do, not a punishment for what you ate.",
        author: "Unknown",
    },
    Quote {
        text: "The pain you feel today will be the strength you feel tomorrow.",
        author: "Unknown",
    },
    Quote {
        text: "Believe in yourself and all that you are. Know that there is something inside you that is greater than any obstacle.",
        author: "Christian D. Larson",
    },
    Quote {
        text: "Fitness is not a destination, it is a way of life.",
        author: "Unknown",
    },
];

// Re-picks when the stored day is stale or the stored index does not point
// into the array. Returns whether anything changed.
pub fn refresh_daily(state: &mut QuoteOfDay, today: &str) -> bool {
    if state.date == today && state.index < QUOTES.len() {
        return false;
    }
    state.index = rand::rng().random_range(0..QUOTES.len());
    state.date = today.to_string();
    true
}

pub fn daily_quote(state: &QuoteOfDay) -> &'static Quote {
    QUOTES.get(state.index).unwrap_or(&QUOTES[0])
}

pub fn random_quote() -> &'static Quote {
    &QUOTES[rand::rng().random_range(0..QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_quote_has_text_and_author() {
        for quote in &QUOTES {
            assert!(!quote.text.is_empty());
            assert!(!quote.author.is_empty());
        }
    }

    #[test]
    fn refresh_pins_an_index_for_the_day() {
        let mut state = QuoteOfDay::default();
        assert!(refresh_daily(&mut state, "2026-01-05"));
        assert!(state.index < QUOTES.len());
        assert_eq!(state.date, "2026-01-05");

        let pinned = state.index;
        assert!(!refresh_daily(&mut state, "2026-01-05"));
        assert_eq!(state.index, pinned);
    }

    #[test]
    fn refresh_re_picks_on_a_new_day() {
        let mut state = QuoteOfDay {
            index: 3,
            date: "2026-01-04".to_string(),
        };
        assert!(refresh_daily(&mut state, "2026-01-05"));
        assert_eq!(state.date, "2026-01-05");
        assert!(state.index < QUOTES.len());
    }

    #[test]
    fn refresh_recovers_from_an_out_of_range_index() {
        let mut state = QuoteOfDay {
            index: 999,
            date: "2026-01-05".to_string(),
        };
        assert!(refresh_daily(&mut state, "2026-01-05"));
        assert!(state.index < QUOTES.len());
    }

    #[test]
    fn daily_quote_follows_the_stored_index() {
        let state = QuoteOfDay {
            index: 1,
            date: "2026-01-05".to_string(),
        };
        assert_eq!(daily_quote(&state).author, "Jim Rohn");
    }

    #[test]
    fn random_quote_comes_from_the_array() {
        for _ in 0..20 {
            let quote = random_quote();
            assert!(QUOTES.iter().any(|q| q.text == quote.text));
        }
    }
}
