#[derive(Debug, Clone)]
pub struct ExtractTextInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub api_key: Option<String>,
}
