use kernel::id::Id;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let id = ProductId::new();
        assert_eq!(ProductId::parse(&id.to_string()), Some(id));
        assert_eq!(ProductId::parse("42"), None);
        assert_eq!(ProductId::parse("not-a-uuid"), None);
    }
}
