use super::*;

use crate::{
    client::{
        router::Route,
        storage::{
            ACCESS_TOKEN_COOKIE, AUTH_TOKEN_KEY, EMPLOYEE_EMAIL_KEY, EMPLOYEE_NAME_KEY,
            REFRESH_TOKEN_COOKIE, REFRESH_TOKEN_KEY, USER_ROLE_KEY,
        },
        util::test::{setup::TEST_CREDENTIAL, TestBuilder},
    },
    model::user::UserRole,
};
