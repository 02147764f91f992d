use serde::{Deserialize, Serialize};

/// Top-level response shape of the remote profile source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteBatch {
    pub results: Vec<RemoteProfile>,
}

/// One raw profile record as returned by the remote source
///
/// Only the fields the engine consumes are modeled; everything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteProfile {
    pub login: RemoteLogin,
    pub name: RemoteName,
    pub dob: RemoteDob,
    pub location: RemoteLocation,
    pub picture: RemotePicture,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDob {
    pub age: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteLocation {
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePicture {
    pub large: String,
}

impl RemoteProfile {
    /// Display name as shown in the app: first and last name composed
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}
