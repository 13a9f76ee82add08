use actix_web::web;

pub mod card;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api/users")
            .service(user::signup::signup)
            .service(user::login::login)
            .service(user::list::list)
            .service(user::detail::detail)
            .service(user::update::update)
            .service(user::set_role::set_role)
            .service(user::delete::remove),
    );

    // my-cards is registered before the {id} routes so the literal segment
    // wins the match
    cfg.service(
        web::scope("/api/cards")
            .service(card::my_cards::my_cards)
            .service(card::list::list)
            .service(card::create::create)
            .service(card::detail::detail)
            .service(card::update::update)
            .service(card::favorite::favorite)
            .service(card::delete::remove),
    );
}
