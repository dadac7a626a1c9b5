//! Planner Client - REST adapter for the remote entity store
//!
//! Implements [`shared::EntityGateway`] for every entity kind over plain
//! JSON endpoints:
//!
//! | Call | Request |
//! |------|---------|
//! | list | `GET {base}/api/entities/{Kind}?sort=-created_date` |
//! | filter | `GET {base}/api/entities/{Kind}?table_number=3` |
//! | create | `POST {base}/api/entities/{Kind}` |
//! | update | `PUT {base}/api/entities/{Kind}/{id}` |
//! | delete | `DELETE {base}/api/entities/{Kind}/{id}` |

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::HttpGateway;
pub use http::HttpClient;
