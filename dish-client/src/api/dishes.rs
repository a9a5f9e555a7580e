//! 餐品管理 API
//!
//! One method per backend endpoint. Each builds the (verb, path, payload)
//! triple and hands it to the transport; results and errors come back
//! untouched.

use http::Method;

use crate::client::{HttpClient, RequestOptions};
use crate::error::ClientResult;
use shared::{
    ActionResult, Dish, DishCategory, DishCategoryCreate, DishCategoryUpdate, DishCreate,
    DishListResponse, DishQueryParams, DishStatus, DishStatusChange, DishUpdate,
};

const DISHES: &str = "/dishes";
const DISH_CATEGORIES: &str = "/dish-categories";

/// Dish and dish category endpoints over an injected transport
#[derive(Debug, Clone)]
pub struct DishApi<C> {
    client: C,
}

impl<C: HttpClient> DishApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying transport
    pub fn client(&self) -> &C {
        &self.client
    }

    // ========== Dishes ==========

    /// 获取餐品列表
    pub async fn get_dish_list(&self, params: &DishQueryParams) -> ClientResult<DishListResponse> {
        self.client
            .request(Method::GET, DISHES, RequestOptions::with_params(params)?)
            .await
    }

    /// 获取餐品详情
    pub async fn get_dish_detail(&self, id: i64) -> ClientResult<Dish> {
        self.client
            .request(Method::GET, &dish_path(id), RequestOptions::none())
            .await
    }

    /// 添加餐品
    pub async fn add_dish(&self, data: &DishCreate) -> ClientResult<Dish> {
        self.client
            .request(Method::POST, DISHES, RequestOptions::with_data(data)?)
            .await
    }

    /// 更新餐品
    pub async fn update_dish(&self, id: i64, data: &DishUpdate) -> ClientResult<Dish> {
        self.client
            .request(Method::PUT, &dish_path(id), RequestOptions::with_data(data)?)
            .await
    }

    /// 删除餐品
    pub async fn delete_dish(&self, id: i64) -> ClientResult<ActionResult> {
        self.client
            .request(Method::DELETE, &dish_path(id), RequestOptions::none())
            .await
    }

    /// 修改餐品状态
    pub async fn change_dish_status(
        &self,
        id: i64,
        status: impl Into<DishStatus>,
    ) -> ClientResult<ActionResult> {
        let body = DishStatusChange {
            status: status.into(),
        };
        self.client
            .request(
                Method::PATCH,
                &format!("{}/status", dish_path(id)),
                RequestOptions::with_data(&body)?,
            )
            .await
    }

    // ========== Categories ==========

    /// 获取餐品分类列表
    pub async fn get_dish_categories(&self) -> ClientResult<Vec<DishCategory>> {
        self.client
            .request(Method::GET, DISH_CATEGORIES, RequestOptions::none())
            .await
    }

    /// 添加餐品分类
    pub async fn add_dish_category(&self, data: &DishCategoryCreate) -> ClientResult<DishCategory> {
        self.client
            .request(Method::POST, DISH_CATEGORIES, RequestOptions::with_data(data)?)
            .await
    }

    /// 更新餐品分类
    pub async fn update_dish_category(
        &self,
        id: i64,
        data: &DishCategoryUpdate,
    ) -> ClientResult<DishCategory> {
        self.client
            .request(Method::PUT, &category_path(id), RequestOptions::with_data(data)?)
            .await
    }

    /// 删除餐品分类
    pub async fn delete_dish_category(&self, id: i64) -> ClientResult<ActionResult> {
        self.client
            .request(Method::DELETE, &category_path(id), RequestOptions::none())
            .await
    }
}

fn dish_path(id: i64) -> String {
    format!("{}/{}", DISHES, id)
}

fn category_path(id: i64) -> String {
    format!("{}/{}", DISH_CATEGORIES, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use async_trait::async_trait;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type Call = (Method, String, RequestOptions);

    /// Records every request and replays canned responses in order
    #[derive(Default)]
    struct MockHttpClient {
        calls: Mutex<Vec<Call>>,
        responses: Mutex<VecDeque<ClientResult<Value>>>,
    }

    impl MockHttpClient {
        fn replying(response: Value) -> Self {
            let mock = Self::default();
            mock.responses.lock().unwrap().push_back(Ok(response));
            mock
        }

        fn failing(error: ClientError) -> Self {
            let mock = Self::default();
            mock.responses.lock().unwrap().push_back(Err(error));
            mock
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn single_call(&self) -> Call {
            let calls = self.calls();
            assert_eq!(calls.len(), 1, "expected exactly one request");
            calls.into_iter().next().unwrap()
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn request<T: DeserializeOwned + Send>(
            &self,
            method: Method,
            path: &str,
            options: RequestOptions,
        ) -> ClientResult<T> {
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), options));
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null));
            Ok(serde_json::from_value(next?)?)
        }
    }

    fn dish_json(id: i64) -> Value {
        json!({
            "id": id,
            "name": "Soup",
            "categoryId": 1,
            "price": 9.5,
            "image": "x.png",
            "description": "",
            "status": 1,
            "saleNum": 0
        })
    }

    fn category_json(id: i64, name: &str) -> Value {
        json!({"id": id, "name": name})
    }

    #[tokio::test]
    async fn test_get_dish_list_forwards_params_unmodified() {
        let api = DishApi::new(MockHttpClient::replying(json!({
            "list": [dish_json(1)],
            "total": 31
        })));

        let response = api
            .get_dish_list(&DishQueryParams::new(1, 10))
            .await
            .unwrap();

        assert_eq!(response.total, 31);
        assert_eq!(response.list[0].name, "Soup");

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/dishes");
        assert_eq!(options.params, Some(json!({"page": 1, "pageSize": 10})));
        assert!(options.data.is_none());
    }

    #[tokio::test]
    async fn test_get_dish_list_with_filters() {
        let api = DishApi::new(MockHttpClient::replying(json!({"list": [], "total": 0})));

        let query = DishQueryParams::new(3, 20)
            .with_name("汤")
            .with_category(4)
            .with_status(DishStatus::ON_SALE);
        let response = api.get_dish_list(&query).await.unwrap();
        assert!(response.is_empty());

        let (_, _, options) = api.client().single_call();
        assert_eq!(
            options.params,
            Some(json!({"page": 3, "pageSize": 20, "name": "汤", "categoryId": 4, "status": 1}))
        );
    }

    #[tokio::test]
    async fn test_get_dish_detail_interpolates_id() {
        let api = DishApi::new(MockHttpClient::replying(dish_json(42)));

        let dish = api.get_dish_detail(42).await.unwrap();
        assert_eq!(dish.id, 42);

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/dishes/42");
        assert_eq!(options, RequestOptions::none());
    }

    #[tokio::test]
    async fn test_add_dish_sends_exact_payload() {
        let api = DishApi::new(MockHttpClient::replying(dish_json(100)));
        let create = DishCreate {
            name: "Soup".to_string(),
            category_id: 1,
            price: 9.5,
            image: "x.png".to_string(),
            description: String::new(),
            status: DishStatus::ON_SALE,
            sale_num: 0,
        };

        let dish = api.add_dish(&create).await.unwrap();
        assert_eq!(dish.id, 100);

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::POST);
        assert_eq!(path, "/dishes");
        let body = options.data.unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Soup",
                "categoryId": 1,
                "price": 9.5,
                "image": "x.png",
                "description": "",
                "status": 1,
                "saleNum": 0
            })
        );
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_dish_sends_partial_body() {
        let api = DishApi::new(MockHttpClient::replying(dish_json(5)));
        let update = DishUpdate {
            name: Some("Hot Soup".to_string()),
            ..Default::default()
        };

        api.update_dish(5, &update).await.unwrap();

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::PUT);
        assert_eq!(path, "/dishes/5");
        assert_eq!(options.data, Some(json!({"name": "Hot Soup"})));
    }

    #[tokio::test]
    async fn test_delete_dish() {
        let api = DishApi::new(MockHttpClient::replying(json!({"success": true})));

        let result = api.delete_dish(9).await.unwrap();
        assert!(result.success);

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::DELETE);
        assert_eq!(path, "/dishes/9");
        assert_eq!(options, RequestOptions::none());
    }

    #[tokio::test]
    async fn test_change_dish_status() {
        let api = DishApi::new(MockHttpClient::default());

        let result = api.change_dish_status(7, 0).await.unwrap();
        // null body from the mock
        assert_eq!(result, ActionResult::ok());

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::PATCH);
        assert_eq!(path, "/dishes/7/status");
        assert_eq!(options.data, Some(json!({"status": 0})));
        assert!(options.params.is_none());
    }

    #[tokio::test]
    async fn test_get_dish_categories() {
        let api = DishApi::new(MockHttpClient::replying(json!([
            category_json(1, "热菜"),
            category_json(2, "凉菜")
        ])));

        let categories = api.get_dish_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].name, "凉菜");

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/dish-categories");
        assert_eq!(options, RequestOptions::none());
    }

    #[tokio::test]
    async fn test_add_dish_category() {
        let api = DishApi::new(MockHttpClient::replying(category_json(3, "汤品")));

        let category = api
            .add_dish_category(&DishCategoryCreate::new("汤品"))
            .await
            .unwrap();
        assert_eq!(category.id, 3);

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::POST);
        assert_eq!(path, "/dish-categories");
        assert_eq!(options.data, Some(json!({"name": "汤品"})));
    }

    #[tokio::test]
    async fn test_update_dish_category() {
        let api = DishApi::new(MockHttpClient::replying(category_json(3, "主食")));

        api.update_dish_category(3, &DishCategoryUpdate::new("主食"))
            .await
            .unwrap();

        let (method, path, options) = api.client().single_call();
        assert_eq!(method, Method::PUT);
        assert_eq!(path, "/dish-categories/3");
        assert_eq!(options.data, Some(json!({"name": "主食"})));
    }

    #[tokio::test]
    async fn test_delete_dish_category() {
        let api = DishApi::new(MockHttpClient::replying(json!(true)));

        let result = api.delete_dish_category(3).await.unwrap();
        assert!(result.success);

        let (method, path, _) = api.client().single_call();
        assert_eq!(method, Method::DELETE);
        assert_eq!(path, "/dish-categories/3");
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let api = DishApi::new(MockHttpClient::failing(ClientError::Api {
            code: 40401,
            message: "dish not found".to_string(),
            details: Some(json!({"id": 42})),
        }));

        let err = api.get_dish_detail(42).await.unwrap_err();
        match err {
            ClientError::Api {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 40401);
                assert_eq!(message, "dish not found");
                assert_eq!(details, Some(json!({"id": 42})));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mutation_error_passes_through() {
        let api = DishApi::new(MockHttpClient::failing(ClientError::Forbidden(
            "read only".to_string(),
        )));

        let err = api.change_dish_status(1, DishStatus::ON_SALE).await.unwrap_err();
        assert!(matches!(err, ClientError::Forbidden(ref msg) if msg == "read only"));
        assert_eq!(err.to_string(), "Permission denied: read only");
        // still exactly one attempt
        assert_eq!(api.client().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let mock = MockHttpClient::default();
        mock.responses
            .lock()
            .unwrap()
            .extend([Ok(dish_json(1)), Ok(json!([]))]);
        let api = DishApi::new(std::sync::Arc::new(mock));

        let (dish, categories) = tokio::join!(api.get_dish_detail(1), api.get_dish_categories());
        assert!(dish.is_ok());
        assert!(categories.is_ok());

        let paths: Vec<String> = api.client().calls().into_iter().map(|c| c.1).collect();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&"/dishes/1".to_string()));
        assert!(paths.contains(&"/dish-categories".to_string()));
    }
}
