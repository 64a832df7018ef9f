pub use std::{
    env, fs,
    io::{Cursor, Write},
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc
};

pub use anyhow::anyhow;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
