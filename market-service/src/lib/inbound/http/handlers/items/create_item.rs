use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::ImageUpload;
use crate::domain::item::models::Stock;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::router::AppState;

/// Create a catalog item from a multipart form.
///
/// Expected parts: `itemName`, `category`, `itemDesc`, `stock`, and the
/// `itemPic` file. Any missing part fails before the image is stored.
pub async fn create_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<String>, ApiError> {
    let mut name = None;
    let mut category = None;
    let mut description = None;
    let mut stock = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);

        match field_name.as_deref() {
            Some("itemName") => {
                name = Some(read_text(field).await?);
            }
            Some("category") => {
                category = Some(read_text(field).await?);
            }
            Some("itemDesc") => {
                description = Some(read_text(field).await?);
            }
            Some("stock") => {
                stock = Some(read_text(field).await?);
            }
            Some("itemPic") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                image = Some(ImageUpload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let (name, category, description, stock, image) =
        match (name, category, description, stock, image) {
            (Some(n), Some(c), Some(d), Some(s), Some(i))
                if !n.is_empty() && !c.is_empty() && !d.is_empty() && !s.is_empty() =>
            {
                (n, c, d, s, i)
            }
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing data in the request body".to_string(),
                ))
            }
        };

    let stock = stock
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest("Invalid stock value".to_string()))
        .and_then(|count| {
            Stock::new(count).map_err(|e| ApiError::BadRequest(e.to_string()))
        })?;

    let item = state
        .item_service
        .create_item(CreateItemCommand {
            name,
            category,
            description,
            stock,
            image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("item {} created successfully", item.id),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
