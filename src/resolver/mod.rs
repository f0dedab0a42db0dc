//! Resolver module for build tool discovery
//!
//! Provides executable and build file resolution for:
//! - Gradle (gradlew, gradle)
//! - Maven (mvnw, mvn)

pub mod detect;
pub mod executable;
pub mod gradle;
pub mod maven;
pub mod probe;
pub mod search;
pub mod traits;

pub use detect::*;
pub use gradle::GradleResolver;
pub use maven::MavenResolver;
pub use probe::{OsProbe, PathProbe, VirtualTree};
pub use traits::*;
