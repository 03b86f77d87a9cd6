//! Section content renderers. Each view is a pure projection of core state
//! into the frame buffer and returns the total line count so the app can
//! clamp scrolling.

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod experience;
pub(crate) mod projects;
pub(crate) mod skills;
