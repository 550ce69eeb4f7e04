mod slug;
pub use self::slug::{ParkSlug, SlugError, TrailSlug};

mod measure;
pub use self::measure::{Distance, DistanceUnit, Elevation, ElevationUnit, Measure};

mod trail;
pub use self::trail::{Difficulty, RouteType, TrailDetail, TrailSummary};
