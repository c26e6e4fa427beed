mod database;
mod media;
mod myconfig;
mod session;

pub use self::database::{ConnectionManager, ConnectionPool, MIGRATOR};
pub use self::media::CloudinaryConfig;
pub use self::myconfig::{AdminKeys, Config};
pub use self::session::{SessionClaims, SessionConfig};
