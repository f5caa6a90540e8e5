mod recovered;

pub use self::recovered::Recovered;
