//! Shared seed helpers for repository integration tests.
//!
//! Builds a minimal but complete organizational hierarchy so report and
//! roster tests can assume every join link exists.

use attendance_core::types::DbId;
use attendance_core::week::{DayOfWeek, WeekType};
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use attendance_db::models::classroom::CreateClassroom;
use attendance_db::models::departament::CreateDepartament;
use attendance_db::models::discipline::CreateDiscipline;
use attendance_db::models::discipline_type::CreateDisciplineType;
use attendance_db::models::education_level::CreateEducationLevel;
use attendance_db::models::education_type::CreateEducationType;
use attendance_db::models::faculty::CreateFaculty;
use attendance_db::models::group::CreateGroup;
use attendance_db::models::profile::CreateProfile;
use attendance_db::models::schedule::{CreateSchedule, Schedule};
use attendance_db::models::specialty::CreateSpecialty;
use attendance_db::models::student::{CreateStudent, Student};
use attendance_db::models::teacher::CreateTeacher;
use attendance_db::models::university::CreateUniversity;
use attendance_db::repositories::{
    ClassroomRepo, DepartamentRepo, DisciplineRepo, DisciplineTypeRepo, EducationLevelRepo,
    EducationTypeRepo, FacultyRepo, GroupRepo, ProfileRepo, ScheduleRepo, SpecialtyRepo,
    StudentRepo, TeacherRepo, UniversityRepo,
};

pub const GROUP_ID: &str = "2101-09.03.01-1";

pub struct Hierarchy {
    pub teacher_id: DbId,
    pub discipline_id: DbId,
    pub discipline_type_id: DbId,
    pub classroom_id: DbId,
    pub group_id: String,
}

/// Create one row of every hierarchy entity, chained together, ending in the
/// group [`GROUP_ID`].
pub async fn seed_hierarchy(pool: &PgPool) -> Hierarchy {
    let university = UniversityRepo::create(
        pool,
        &CreateUniversity {
            university_name: "ОГАУ".into(),
            head_last_name: "Ректоров".into(),
            head_first_name: "Ректор".into(),
            head_middle_name: "Ректорович".into(),
            university_email: "rector@osau.test".into(),
        },
    )
    .await
    .expect("university");

    let faculty = FacultyRepo::create(
        pool,
        &CreateFaculty {
            university_id: university.university_id,
            faculty_name: "Факультет информатики".into(),
            head_last_name: "Деканов".into(),
            head_first_name: "Декан".into(),
            head_middle_name: "Деканович".into(),
            faculty_email: "dean@osau.test".into(),
        },
    )
    .await
    .expect("faculty");

    let departament = DepartamentRepo::create(
        pool,
        &CreateDepartament {
            faculty_id: faculty.faculty_id,
            departament_name: "Кафедра программирования".into(),
            head_last_name: "Заведующий".into(),
            head_first_name: "Завкаф".into(),
            head_middle_name: "Завкафович".into(),
            departament_email: "dept@osau.test".into(),
        },
    )
    .await
    .expect("departament");

    let teacher = TeacherRepo::create(
        pool,
        &CreateTeacher {
            departament_id: departament.departament_id,
            last_name: "Преподаватель".into(),
            first_name: "Петр".into(),
            middle_name: "Петрович".into(),
            teacher_email: "teacher@osau.test".into(),
        },
    )
    .await
    .expect("teacher");

    let discipline = DisciplineRepo::create(
        pool,
        &CreateDiscipline {
            departament_id: departament.departament_id,
            discipline_name: "Математика".into(),
        },
    )
    .await
    .expect("discipline");

    let discipline_type = DisciplineTypeRepo::create(
        pool,
        &CreateDisciplineType {
            discipline_type_name: "Лекция".into(),
        },
    )
    .await
    .expect("discipline type");

    let classroom = ClassroomRepo::create(
        pool,
        &CreateClassroom {
            classroom_name: "301".into(),
        },
    )
    .await
    .expect("classroom");

    let education_level = EducationLevelRepo::create(
        pool,
        &CreateEducationLevel {
            education_level_name: "Бакалавриат".into(),
        },
    )
    .await
    .expect("education level");

    let education_type = EducationTypeRepo::create(
        pool,
        &CreateEducationType {
            education_type_name: "Очная".into(),
        },
    )
    .await
    .expect("education type");

    SpecialtyRepo::create(
        pool,
        &CreateSpecialty {
            specialty_code: "09.03.01".into(),
            specialty_name: "Информатика".into(),
            departament_id: departament.departament_id,
            education_level_id: education_level.education_level_id,
        },
    )
    .await
    .expect("specialty");

    let profile = ProfileRepo::create(
        pool,
        &CreateProfile {
            specialty_code: "09.03.01".into(),
            education_type_id: education_type.education_type_id,
            profile_name: "Разработка ПО".into(),
        },
    )
    .await
    .expect("profile");

    let group = GroupRepo::create(
        pool,
        &CreateGroup {
            group_id: GROUP_ID.into(),
            profile_id: profile.profile_id,
        },
    )
    .await
    .expect("group");

    Hierarchy {
        teacher_id: teacher.teacher_id,
        discipline_id: discipline.discipline_id,
        discipline_type_id: discipline_type.discipline_type_id,
        classroom_id: classroom.classroom_id,
        group_id: group.group_id,
    }
}

pub async fn seed_student(pool: &PgPool, group_id: &str, last_name: &str) -> Student {
    StudentRepo::create(
        pool,
        &CreateStudent {
            group_id: group_id.into(),
            last_name: last_name.into(),
            first_name: "Иван".into(),
            middle_name: "Иванович".into(),
        },
    )
    .await
    .expect("student")
}

pub async fn seed_schedule(pool: &PgPool, hierarchy: &Hierarchy) -> Schedule {
    ScheduleRepo::create(
        pool,
        &CreateSchedule {
            group_id: hierarchy.group_id.clone(),
            discipline_id: hierarchy.discipline_id,
            teacher_id: hierarchy.teacher_id,
            discipline_type_id: hierarchy.discipline_type_id,
            classroom_id: hierarchy.classroom_id,
            semester: 1,
            begin_studies: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            week_type: WeekType::Upper,
            day_of_week: DayOfWeek::Tuesday,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            is_actual: true,
        },
    )
    .await
    .expect("schedule")
}
