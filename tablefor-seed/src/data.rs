//! The static sample set. User and place ids are placeholders; replace
//! them with real document ids from the target project before running.

use tablefor_common::model::{
    Id,
    post::{Caption, CreatePost},
    user::{Author, Username},
};

pub const USER_1_ID: &str = "demo-user-1";
pub const USER_2_ID: &str = "demo-user-2";
pub const USER_1_USERNAME: &str = "User1";
pub const USER_2_USERNAME: &str = "User2";

pub const PLACES: [&str; 10] = [
    "place-001",
    "place-002",
    "place-003",
    "place-004",
    "place-005",
    "place-006",
    "place-007",
    "place-008",
    "place-009",
    "place-010",
];

pub const CAPTIONS: [&str; 10] = [
    "Finally tried this place - amazing!",
    "Great spot for dinner with friends!",
    "Hidden gem, highly recommend!",
    "Perfect for date night.",
    "The vibes here are unmatched.",
    "Can't stop thinking about this meal.",
    "New favorite spot in town!",
    "Worth the wait, trust me.",
    "Already planning my next visit.",
    "This place never disappoints.",
];

fn user_1() -> Author {
    Author {
        id: Id::new_unchecked(USER_1_ID),
        username: Username::new_unchecked(USER_1_USERNAME),
    }
}

fn user_2() -> Author {
    Author {
        id: Id::new_unchecked(USER_2_ID),
        username: Username::new_unchecked(USER_2_USERNAME),
    }
}

/// One post per place, author alternating by index parity (even indices
/// go to user 1), caption taken by the same index.
#[must_use]
pub fn plan() -> Vec<CreatePost> {
    PLACES
        .into_iter()
        .zip(CAPTIONS)
        .enumerate()
        .map(|(index, (place, caption))| {
            let author = if index % 2 == 0 { user_1() } else { user_2() };
            CreatePost {
                author,
                caption: Caption::new_unchecked(caption),
                place: Id::new_unchecked(place),
            }
        })
        .collect()
}
