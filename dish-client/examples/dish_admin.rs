// dish-client/examples/dish_admin.rs
// 餐品管理示例: 列出分类和第一页餐品

use dish_client::logger::init_logger;
use dish_client::{ClientConfig, DISHES_ROUTE, DishApi, DishQueryParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger("info");

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Connecting to dish backend");

    let api = DishApi::new(config.build_http_client()?);

    let categories = api.get_dish_categories().await?;
    for category in &categories {
        tracing::info!(id = category.id, name = %category.name, "Category");
    }

    let mut query = DishQueryParams::new(1, 10);
    if let Some(name) = std::env::args().nth(1) {
        query = query.with_name(name);
    }

    match api.get_dish_list(&query).await {
        Ok(page) => {
            tracing::info!("{} dishes in total", page.total);
            for dish in page.list {
                tracing::info!(id = dish.id, price = dish.price, status = %dish.status, "{}", dish.name);
            }
        }
        Err(e) => tracing::error!("Failed to list dishes: {}", e),
    }

    println!("{}", serde_json::to_string_pretty(&*DISHES_ROUTE)?);
    Ok(())
}
