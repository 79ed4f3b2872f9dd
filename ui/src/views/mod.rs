mod academics;
pub use academics::Academics;

mod attendance;
pub use attendance::Attendance;

mod skills;
pub use skills::Skills;

mod goals;
pub use goals::Goals;
