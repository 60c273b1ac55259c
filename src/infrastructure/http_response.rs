// HTTP response utilities for file downloads
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

/// Build an attachment response carrying CSV bytes.
pub fn csv_download_response(bytes: Vec<u8>, filename: &str) -> Result<Response<Body>, StatusCode> {
    let disposition = content_disposition(filename);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()))
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// `attachment` disposition with an ASCII fallback name and an RFC 5987 encoded name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_download_headers() {
        let response = csv_download_response(b"a,b\n1,2\n".to_vec(), "sales_data.csv").unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
        assert_eq!(headers[header::CONTENT_LENGTH], "8");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"sales_data.csv\"; filename*=UTF-8''sales_data.csv"
        );
    }

    #[test]
    fn test_content_disposition_escapes_non_ascii() {
        let value = content_disposition("売上 data.csv");
        assert_eq!(
            value,
            "attachment; filename=\"___data.csv\"; filename*=UTF-8''%E5%A3%B2%E4%B8%8A%20data.csv"
        );
    }
}
