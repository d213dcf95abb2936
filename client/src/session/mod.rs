//! # Session
//!
//! Who is signed in, and how that survives a restart.
//!
//! ```text
//! session/
//! ├── storage.rs  - Storage trait, FileStorage, MemoryStorage
//! ├── store.rs    - SessionStore: the identity/credential pair + watch channel
//! └── manager.rs  - SessionManager: sign-in, sign-up, sign-out, route gating
//! ```

pub mod manager;
pub mod storage;
pub mod store;

pub use manager::SessionManager;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{SessionState, SessionStore, CREDENTIAL_KEY, IDENTITY_KEY};
