//! Card tokens as the engine writes them.
//!
//! A card is two characters, rank then suit (`Ah`). A card list is
//! bracketed (`[Ah,Kd]`, `[AhKd]`). Nothing here fails: unreadable input is
//! reported through `log::warn!` and reads as the empty hand.

use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// Reads the first two characters of `token` as one card.
pub fn parse_card(token: &str) -> Hand {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(rank), Some(suit)) => card(rank, suit),
        (Some(rank), None) => card(rank, '\0'),
        _ => {
            log::warn!("empty card token");
            Hand::empty()
        }
    }
}

/// Reads a bracketed card list.
///
/// After the `[`, cards are read two characters at a time, each optionally
/// followed by one `,` or whitespace separator. Reading stops at `]` or when
/// fewer than two characters remain.
pub fn parse_cards(token: &str) -> Hand {
    let Some(body) = token.strip_prefix('[') else {
        log::warn!("cannot parse cards string ``{}''", token);
        return Hand::empty();
    };
    let mut hand = Hand::empty();
    let mut chars = body.chars().peekable();
    while let Some(rank) = chars.next_if(|c| *c != ']') {
        let Some(suit) = chars.next() else { break };
        hand = Hand::union(hand, card(rank, suit));
        chars.next_if(|c| *c == ',' || c.is_ascii_whitespace());
    }
    hand
}

/// Number of cards present.
pub fn count_cards(hand: Hand) -> usize {
    hand.size()
}

fn card(rank: char, suit: char) -> Hand {
    Rank::try_from(rank)
        .and_then(|rank| Suit::try_from(suit).map(|suit| Card::from((rank, suit))))
        .map(Hand::from)
        .unwrap_or_else(|e| {
            log::warn!("{}", e);
            Hand::empty()
        })
}
