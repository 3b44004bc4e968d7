mod release;

pub use release::NewReleaseManager;
