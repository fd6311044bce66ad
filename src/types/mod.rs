//! Response envelope and typed Graph models.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`GraphResponse`] | Outcome of a request: disabled no-op or received envelope |
//! | [`ResponseEnvelope`] | Status code plus parsed and raw body |
//! | [`UserProfile`], [`FriendsPage`], [`ProfilePicture`] | Typed bodies for the helper endpoints |
//! | [`GraphError`] | The `error` object of a failed call |

pub mod graph;
pub mod response;

pub use graph::{
    Friend, FriendsPage, FriendsSummary, GraphError, PictureData, ProfilePicture, UserProfile,
};
pub use response::{GraphResponse, ResponseEnvelope};
