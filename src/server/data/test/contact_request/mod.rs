use crate::{
    model::contact::RequestType,
    server::{
        data::contact_request::ContactRequestRepository,
        model::contact_request::CreateContactRequestParam,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;
