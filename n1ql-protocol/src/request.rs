use serde_json::{Map, Value};

/// Body of an outgoing query service request.
pub type RequestBody = Map<String, Value>;

/// A component of a query request that knows how to write its own fields
/// into the request body.
pub trait Serialize {
    /// Writes the fields owned by this component into `body`. Must not read
    /// or remove fields written by other components.
    fn serialize(&self, body: &mut RequestBody);

    /// Serializes into a fresh body.
    fn serialize_to_body(&self) -> RequestBody {
        let mut body = RequestBody::new();
        self.serialize(&mut body);
        body
    }
}
