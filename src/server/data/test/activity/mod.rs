use crate::server::data::activity::ActivityRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_with_signups;
mod find_by_id;
mod get_all_with_signups;
