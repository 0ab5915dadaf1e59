#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub interval: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CreateSubscriptionReqArgs {
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateSubscriptionReqArgs {
    pub plan_id: String,
}
