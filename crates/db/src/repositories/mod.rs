//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Single-row gets use
//! `fetch_optional`; callers translate `None` to their not-found error.
//! Patch methods delegate to [`crate::patch::PatchBuilder`].

pub mod attendance_repo;
pub mod classroom_repo;
pub mod departament_repo;
pub mod discipline_repo;
pub mod discipline_type_repo;
pub mod education_level_repo;
pub mod education_type_repo;
pub mod faculty_repo;
pub mod group_repo;
pub mod headman_repo;
pub mod profile_repo;
pub mod report_repo;
pub mod schedule_repo;
pub mod specialty_repo;
pub mod student_repo;
pub mod teacher_repo;
pub mod university_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use classroom_repo::ClassroomRepo;
pub use departament_repo::DepartamentRepo;
pub use discipline_repo::DisciplineRepo;
pub use discipline_type_repo::DisciplineTypeRepo;
pub use education_level_repo::EducationLevelRepo;
pub use education_type_repo::EducationTypeRepo;
pub use faculty_repo::FacultyRepo;
pub use group_repo::GroupRepo;
pub use headman_repo::HeadmanRepo;
pub use profile_repo::ProfileRepo;
pub use report_repo::ReportRepo;
pub use schedule_repo::ScheduleRepo;
pub use specialty_repo::SpecialtyRepo;
pub use student_repo::StudentRepo;
pub use teacher_repo::TeacherRepo;
pub use university_repo::UniversityRepo;
pub use user_repo::UserRepo;
