//! Request validation: pure predicates plus per-entity rule tables.
//!
//! Rules are static (field name -> predicate) and evaluated by plain
//! iteration; a failing rule becomes a `BadRequest` naming the field.

use crate::error::AppError;
use crate::models::{Order, OrderLine, Product, User};
use regex::Regex;
use rust_decimal::Decimal;

/// True iff `id` is a plausible primary key: strictly positive.
/// Non-numeric path segments are rejected earlier, at the handler boundary.
pub fn is_valid_id(id: i64) -> bool {
    id >= 1
}

/// True iff `s` is non-empty after trimming.
pub fn is_valid_str(s: &str) -> bool {
    is_valid_string(s, 1)
}

/// True iff `s`, after trimming, is at least `min_len` characters.
pub fn is_valid_string(s: &str, min_len: usize) -> bool {
    s.trim().chars().count() >= min_len.max(1)
}

/// Plural form: every string must pass [`is_valid_str`].
pub fn are_valid_strings(values: &[&str]) -> bool {
    values.iter().all(|s| is_valid_str(s))
}

pub fn is_valid_email(s: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(s.trim()))
        .unwrap_or(false)
}

/// One validation rule: the field it covers and the predicate that must hold.
pub struct FieldRule<T: 'static> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
}

/// Evaluate `rules` against `value`; the first failing rule is the error.
pub fn validate<T>(value: &T, rules: &[FieldRule<T>]) -> Result<(), AppError> {
    for rule in rules {
        if !(rule.check)(value) {
            return Err(AppError::BadRequest(format!(
                "{} is missing or invalid",
                rule.field
            )));
        }
    }
    Ok(())
}

/// Rules for a user being registered. The id is store-assigned and not checked.
pub static NEW_USER_RULES: &[FieldRule<User>] = &[
    FieldRule { field: "username", check: |u: &User| is_valid_string(&u.username, 3) },
    FieldRule {
        field: "password",
        check: |u: &User| u.password.as_deref().is_some_and(is_valid_str),
    },
    FieldRule { field: "firstName", check: |u: &User| is_valid_str(&u.first_name) },
    FieldRule { field: "lastName", check: |u: &User| is_valid_str(&u.last_name) },
    FieldRule { field: "email", check: |u: &User| is_valid_email(&u.email) },
    FieldRule { field: "role", check: |u: &User| is_valid_str(&u.role) },
];

/// Rules for a full-row user update: everything above, plus a valid id.
pub static UPDATE_USER_RULES: &[FieldRule<User>] = &[
    FieldRule { field: "id", check: |u: &User| is_valid_id(u.id) },
    FieldRule { field: "username", check: |u: &User| is_valid_string(&u.username, 3) },
    FieldRule { field: "firstName", check: |u: &User| is_valid_str(&u.first_name) },
    FieldRule { field: "lastName", check: |u: &User| is_valid_str(&u.last_name) },
    FieldRule { field: "email", check: |u: &User| is_valid_email(&u.email) },
    FieldRule { field: "role", check: |u: &User| is_valid_str(&u.role) },
];

pub static NEW_ORDER_RULES: &[FieldRule<Order>] = &[
    FieldRule { field: "comments", check: |o: &Order| is_valid_str(&o.comments) },
    FieldRule { field: "userId", check: |o: &Order| is_valid_id(o.user_id) },
];

pub static UPDATE_ORDER_RULES: &[FieldRule<Order>] = &[
    FieldRule { field: "orderId", check: |o: &Order| is_valid_id(o.order_id) },
    FieldRule { field: "comments", check: |o: &Order| is_valid_str(&o.comments) },
    FieldRule { field: "userId", check: |o: &Order| is_valid_id(o.user_id) },
];

pub static NEW_ORDER_LINE_RULES: &[FieldRule<OrderLine>] = &[
    FieldRule { field: "productId", check: |l: &OrderLine| is_valid_id(l.product_id) },
    FieldRule { field: "orderId", check: |l: &OrderLine| is_valid_id(l.order_id) },
    FieldRule { field: "quantity", check: |l: &OrderLine| l.quantity >= 1 },
];

pub static UPDATE_ORDER_LINE_RULES: &[FieldRule<OrderLine>] = &[
    FieldRule { field: "orderLineId", check: |l: &OrderLine| is_valid_id(l.order_line_id) },
    FieldRule { field: "productId", check: |l: &OrderLine| is_valid_id(l.product_id) },
    FieldRule { field: "orderId", check: |l: &OrderLine| is_valid_id(l.order_id) },
    FieldRule { field: "quantity", check: |l: &OrderLine| l.quantity >= 1 },
];

pub static NEW_PRODUCT_RULES: &[FieldRule<Product>] = &[
    FieldRule { field: "name", check: |p: &Product| is_valid_str(&p.name) },
    FieldRule { field: "description", check: |p: &Product| is_valid_str(&p.description) },
    FieldRule { field: "cost", check: |p: &Product| p.cost >= Decimal::ZERO },
];

pub static UPDATE_PRODUCT_RULES: &[FieldRule<Product>] = &[
    FieldRule { field: "prodId", check: |p: &Product| is_valid_id(p.prod_id) },
    FieldRule { field: "name", check: |p: &Product| is_valid_str(&p.name) },
    FieldRule { field: "description", check: |p: &Product| is_valid_str(&p.description) },
    FieldRule { field: "cost", check: |p: &Product| p.cost >= Decimal::ZERO },
];
