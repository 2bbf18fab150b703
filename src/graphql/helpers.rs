use async_graphql::ErrorExtensions;

use crate::errors::AppResult;

/// Converts a service result into a GraphQL result carrying `extensions.code`.
pub fn to_graphql<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|err| err.extend())
}
