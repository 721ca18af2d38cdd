use serde::Serialize;

/// Body of `POST /api/sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_uses_message_key() {
        let body = serde_json::to_value(SendMessageRequest { message: "hi" }).expect("encode");

        assert_eq!(body, serde_json::json!({ "message": "hi" }));
    }
}
