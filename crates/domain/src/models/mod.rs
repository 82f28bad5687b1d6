//! Domain models for the Marriage App.

pub mod invite;
pub mod wish;

pub use invite::{
    total_invited_people, HeadcountPolicy, Invite, InviteDraft, InviteForm,
    MAX_INVITE_NAME_LENGTH,
};
pub use wish::{NewWish, Wish, WishForm, MAX_WISH_NAME_LENGTH};
