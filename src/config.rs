#[cfg(debug_assertions)]
pub fn get_graphql_url() -> &'static str {
    "http://localhost:1337/graphql"  // Local Strapi when running the API locally
}

#[cfg(not(debug_assertions))]
pub fn get_graphql_url() -> &'static str {
    "https://api-qa.seamasterai.com/graphql"
}
