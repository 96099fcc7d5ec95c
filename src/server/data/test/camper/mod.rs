use crate::server::{
    data::camper::CamperRepository,
    model::camper::{CreateCamperParam, UpdateCamperParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_with_signups;
mod get_all_with_signups;
mod update;
