use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

pub struct AccessTokenMarker;
pub type AccessTokenId = Id<AccessTokenMarker>;
