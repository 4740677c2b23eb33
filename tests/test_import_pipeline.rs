use veckomat::{import_recipe, ImportError};

fn page_with_head(head: &str, body: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>{head}</head>
        <body>{body}</body>
        </html>
        "#
    )
}

#[tokio::test]
async fn test_structured_recipe_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org/",
        "@type": "Recipe",
        "name": "Krämig kycklingpasta",
        "image": ["https://example.com/pasta.jpg"],
        "recipeIngredient": ["300 g kycklingfilé", "2 dl grädde", "250 g pasta"],
        "recipeInstructions": [
            {"@type": "HowToStep", "text": "Strimla och stek kycklingen."},
            {"@type": "HowToStep", "text": "Häll på grädde och låt koka ihop."},
            {"@type": "HowToStep", "text": "Blanda med nykokt pasta."}
        ],
        "recipeYield": "4 portioner"
    }
    "#;
    let head = format!(r#"<script type="application/ld+json">{json_ld}</script>"#);

    let _m = server
        .mock("GET", "/recept/pasta")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page_with_head(&head, "<h1>Recept</h1>"))
        .create_async()
        .await;

    let url = format!("{}/recept/pasta", server.url());
    let recipe = import_recipe(&url).await.unwrap();

    assert_eq!(recipe.title.as_deref(), Some("Krämig kycklingpasta"));
    assert_eq!(recipe.image.as_deref(), Some("https://example.com/pasta.jpg"));
    assert_eq!(recipe.ingredients.as_ref().map(Vec::len), Some(3));
    assert_eq!(
        recipe.steps.as_deref().and_then(|s| s.first().cloned()),
        Some("Strimla och stek kycklingen.".to_string())
    );
    assert_eq!(recipe.servings, Some(4.0));
    assert_eq!(recipe.source_url, url);
}

#[tokio::test]
async fn test_heuristic_fallback_page() {
    let mut server = mockito::Server::new_async().await;
    let head = r#"
        <title>Mormors pannkakor - Matbloggen</title>
        <meta property="og:title" content="Mormors pannkakor" />
        <meta property="og:image" content="https://example.com/pannkakor.jpg" />
    "#;
    let body = r#"
        <h2>Ingredienser</h2>
        <ul>
            <li>4 dl mjöl</li>
            <li>2 ägg</li>
            <li>6 dl mjölk</li>
        </ul>
        <h2>Gör så här</h2>
        <ol>
            <li>Vispa ihop smeten.</li>
            <li>Grädda i stekpanna.</li>
        </ol>
    "#;

    let _m = server
        .mock("GET", "/pannkakor")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page_with_head(head, body))
        .create_async()
        .await;

    let url = format!("{}/pannkakor", server.url());
    let recipe = import_recipe(&url).await.unwrap();

    assert_eq!(recipe.title.as_deref(), Some("Mormors pannkakor"));
    assert_eq!(recipe.image.as_deref(), Some("https://example.com/pannkakor.jpg"));
    assert_eq!(
        recipe.ingredients.as_deref(),
        Some(
            &[
                "4 dl mjöl".to_string(),
                "2 ägg".to_string(),
                "6 dl mjölk".to_string()
            ][..]
        )
    );
    assert_eq!(
        recipe.steps.as_deref(),
        Some(&["Vispa ihop smeten.".to_string(), "Grädda i stekpanna.".to_string()][..])
    );
    assert_eq!(recipe.servings, None);
}

#[tokio::test]
async fn test_vendor_markup_fills_missing_lists() {
    let mut server = mockito::Server::new_async().await;
    let head = r#"
        <script type="application/ld+json">
        { "@type": "Recipe", "name": "Banankaka" }
        </script>
    "#;
    let body = r#"
        <div class="wprm-recipe-ingredients-container">
            <ul><li>3 bananer</li><li>2 dl socker</li></ul>
        </div>
        <div class="wprm-recipe-instructions-container">
            <ul><li>Mosa bananerna.</li><li>Grädda i 60 minuter.</li></ul>
        </div>
    "#;

    let _m = server
        .mock("GET", "/banankaka")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page_with_head(head, body))
        .create_async()
        .await;

    let url = format!("{}/banankaka", server.url());
    let recipe = import_recipe(&url).await.unwrap();

    assert_eq!(recipe.title.as_deref(), Some("Banankaka"));
    assert_eq!(
        recipe.ingredients.as_deref(),
        Some(&["3 bananer".to_string(), "2 dl socker".to_string()][..])
    );
    assert_eq!(
        recipe.steps.as_deref(),
        Some(&["Mosa bananerna.".to_string(), "Grädda i 60 minuter.".to_string()][..])
    );
}

#[tokio::test]
async fn test_broken_block_then_valid_block() {
    let mut server = mockito::Server::new_async().await;
    let head = r#"
        <script type="application/ld+json">{ "broken": </script>
        <script type="application/ld+json">
        { "@type": "Recipe", "name": "Hel och ren", "recipeInstructions": ["Klart."] }
        </script>
    "#;

    let _m = server
        .mock("GET", "/tva-block")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page_with_head(head, ""))
        .create_async()
        .await;

    let url = format!("{}/tva-block", server.url());
    let recipe = import_recipe(&url).await.unwrap();
    assert_eq!(recipe.title.as_deref(), Some("Hel och ren"));
}

#[tokio::test]
async fn test_page_without_recipe_data_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/om-oss")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body><p>Bara text, ingen metadata.</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/om-oss", server.url());
    let result = import_recipe(&url).await;
    assert!(matches!(result, Err(ImportError::NoRecipeFound)));
}

#[tokio::test]
async fn test_fetch_failure_surfaces_as_fetch_error() {
    // nothing listens on this port; a single attempt, no retries
    let result = import_recipe("http://127.0.0.1:9/recipe").await;
    match result {
        Err(ImportError::Fetch(_)) => {}
        other => panic!("expected fetch error, got {other:?}"),
    }
}
