use crate::server::{data::signup::SignupRepository, model::signup::CreateSignupParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
