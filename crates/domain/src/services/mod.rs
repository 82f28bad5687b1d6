//! Domain services for the Marriage App.
//!
//! Services hold the validation rules and delegate storage to the
//! [`WishStore`] and [`InviteStore`] traits.

pub mod export;
pub mod guestbook;
pub mod invites;
pub mod memory;

pub use export::{invites_to_csv, INVITES_CSV_FILENAME, INVITES_CSV_HEADER};
pub use guestbook::{WishService, WishStore};
pub use invites::{InviteService, InviteStore};
pub use memory::{InMemoryInviteStore, InMemoryWishStore};
