pub mod local;
pub mod remote;

pub use local::LocalDictionary;
pub use remote::RemoteDictionary;
