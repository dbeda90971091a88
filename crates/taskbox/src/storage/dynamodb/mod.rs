//! DynamoDB storage backend implementation.
//!
//! Provides a DynamoDB-based implementation of `TodoRepository` using
//! `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
