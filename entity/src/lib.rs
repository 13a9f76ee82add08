pub mod card;
pub mod card_favorite;
pub mod user;

/*
 Users sign up with a hashed password and a role tag (regular/business/admin).
 Cards are public documents that may point at an owning user; favorites live in
 card_favorite so the same user can never favorite a card twice.
 */
