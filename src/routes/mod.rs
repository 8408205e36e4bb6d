pub mod admin;
pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::list_tasks)
            .service(tasks::get_task),
    )
    .service(
        web::scope("/admin")
            .service(admin::create_task)
            .service(admin::update_task)
            .service(admin::delete_task)
            .service(admin::assign_task)
            .service(admin::unassign_task),
    )
    .service(
        web::scope("/users")
            .service(users::list_users)
            .service(users::user_tasks)
            .service(users::get_user),
    );
}
