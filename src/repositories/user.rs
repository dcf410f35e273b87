use diesel::prelude::*;
use diesel::OptionalExtension;

use super::PgPoolConn;
use crate::models::{NewUser, User};
use crate::schema::users::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_user: &NewUser) -> Result<User, diesel::result::Error> {
    diesel::insert_into(users)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(conn)
}

pub fn find_by_username(conn: &mut PgPoolConn, login: &str) -> Result<Option<User>, diesel::result::Error> {
    users
        .filter(username.eq(login))
        .select(User::as_select())
        .first(conn)
        .optional()
}
