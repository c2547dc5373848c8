//! Routes mounted at `/admins`. Every handler requires the admin role.
//!
//! Collection verbs follow the external contract: POST/PUT/PATCH on the
//! collection path (keys travel in the body), DELETE and single GET by key
//! in the path. Universities and faculties keep their historical `/id/{id}`
//! spelling; the other entities use `/{id}` directly.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{
    attendance, classroom, departament, discipline, discipline_type, education_level,
    education_type, faculty, group, headman, profile, schedule, specialty, student, teacher,
    university, users,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let universities = Router::new()
        .route(
            "/",
            post(university::create)
                .put(university::put)
                .patch(university::patch)
                .get(university::list),
        )
        .route(
            "/id/{id}",
            get(university::get_by_id).delete(university::delete),
        )
        .route("/name/{name}", get(university::get_by_name));

    let faculties = Router::new()
        .route(
            "/",
            post(faculty::create)
                .put(faculty::put)
                .patch(faculty::patch)
                .get(faculty::list),
        )
        .route("/id/{id}", get(faculty::get_by_id).delete(faculty::delete))
        .route("/name/{name}", get(faculty::get_by_name))
        .route("/university/id/{id}", get(faculty::list_by_university));

    let users_routes = Router::new()
        .route(
            "/",
            post(users::create)
                .put(users::put)
                .patch(users::patch)
                .get(users::list),
        )
        .route("/{id}", get(users::get_by_id).delete(users::delete))
        .route("/name/{name}", get(users::get_by_username))
        .route("/student/{id}", get(users::get_by_student_id))
        .route("/headman/{id}", get(users::get_by_headman_id))
        .route("/teacher/{id}", get(users::get_by_teacher_id))
        .route("/role/{role}", get(users::list_by_role));

    let departaments = Router::new()
        .route(
            "/",
            post(departament::create)
                .put(departament::put)
                .patch(departament::patch)
                .get(departament::list),
        )
        .route(
            "/{id}",
            get(departament::get_by_id).delete(departament::delete),
        )
        .route("/name/{name}", get(departament::get_by_name));

    let teachers = Router::new()
        .route(
            "/",
            post(teacher::create)
                .put(teacher::put)
                .patch(teacher::patch)
                .get(teacher::list),
        )
        .route("/{id}", get(teacher::get_by_id).delete(teacher::delete))
        .route("/email/{email}", get(teacher::get_by_email))
        .route("/departament/{id}", get(teacher::list_by_departament));

    let disciplines = Router::new()
        .route(
            "/",
            post(discipline::create)
                .put(discipline::put)
                .patch(discipline::patch)
                .get(discipline::list),
        )
        .route(
            "/{id}",
            get(discipline::get_by_id).delete(discipline::delete),
        )
        .route("/name/{name}", get(discipline::get_by_name));

    let discipline_types = Router::new()
        .route(
            "/",
            post(discipline_type::create)
                .put(discipline_type::put)
                .patch(discipline_type::patch)
                .get(discipline_type::list),
        )
        .route(
            "/{id}",
            get(discipline_type::get_by_id).delete(discipline_type::delete),
        );

    let classrooms = Router::new()
        .route(
            "/",
            post(classroom::create)
                .put(classroom::put)
                .patch(classroom::patch)
                .get(classroom::list),
        )
        .route("/{id}", get(classroom::get_by_id).delete(classroom::delete));

    let education_levels = Router::new()
        .route(
            "/",
            post(education_level::create)
                .put(education_level::put)
                .patch(education_level::patch)
                .get(education_level::list),
        )
        .route(
            "/{id}",
            get(education_level::get_by_id).delete(education_level::delete),
        );

    let education_types = Router::new()
        .route(
            "/",
            post(education_type::create)
                .put(education_type::put)
                .patch(education_type::patch)
                .get(education_type::list),
        )
        .route(
            "/{id}",
            get(education_type::get_by_id).delete(education_type::delete),
        );

    let specialties = Router::new()
        .route(
            "/",
            post(specialty::create)
                .put(specialty::put)
                .patch(specialty::patch)
                .get(specialty::list),
        )
        .route("/{code}", delete(specialty::delete))
        .route("/code/{code}", get(specialty::get_by_code))
        .route("/name/{name}", get(specialty::get_by_name))
        .route("/departament/{id}", get(specialty::list_by_departament));

    let profiles = Router::new()
        .route(
            "/",
            post(profile::create)
                .put(profile::put)
                .patch(profile::patch)
                .get(profile::list),
        )
        .route("/{id}", get(profile::get_by_id).delete(profile::delete))
        .route("/name/{name}", get(profile::get_by_name))
        .route("/specialty/{code}", get(profile::list_by_specialty));

    let groups = Router::new()
        .route(
            "/",
            post(group::create)
                .put(group::put)
                .patch(group::patch)
                .get(group::list),
        )
        .route("/{id}", get(group::get_by_id).delete(group::delete))
        .route("/profile/{id}", get(group::list_by_profile));

    let students = Router::new()
        .route(
            "/",
            post(student::create)
                .put(student::put)
                .patch(student::patch)
                .get(student::list),
        )
        .route("/{id}", get(student::get_by_id).delete(student::delete))
        .route("/group/{group_id}", get(student::list_by_group));

    let headmans = Router::new()
        .route(
            "/",
            post(headman::create)
                .put(headman::put)
                .patch(headman::patch)
                .get(headman::list),
        )
        .route("/{id}", get(headman::get_by_id).delete(headman::delete))
        .route("/student/{id}", get(headman::get_by_student_id));

    let schedules = Router::new()
        .route(
            "/",
            post(schedule::create)
                .put(schedule::put)
                .patch(schedule::patch)
                .get(schedule::list),
        )
        .route("/{id}", get(schedule::get_by_id).delete(schedule::delete))
        .route("/group/{group_id}", get(schedule::list_by_group))
        .route("/teacher/{id}", get(schedule::list_by_teacher));

    let attendances = Router::new()
        .route(
            "/",
            post(attendance::create)
                .put(attendance::put)
                .patch(attendance::patch)
                .get(attendance::list),
        )
        .route(
            "/{id}",
            get(attendance::get_by_id).delete(attendance::delete),
        )
        .route("/student/{id}", get(attendance::list_by_student));

    Router::new()
        .nest("/universities", universities)
        .nest("/faculties", faculties)
        .nest("/users", users_routes)
        .nest("/departaments", departaments)
        .nest("/teachers", teachers)
        .nest("/disciplines", disciplines)
        .nest("/discipline_types", discipline_types)
        .nest("/classrooms", classrooms)
        .nest("/education_levels", education_levels)
        .nest("/education_types", education_types)
        .nest("/specialties", specialties)
        .nest("/profiles", profiles)
        .nest("/groups", groups)
        .nest("/students", students)
        .nest("/headmans", headmans)
        .nest("/schedules", schedules)
        .nest("/attendances", attendances)
}
