use crate::modules::{
    cart::repository::{self as cart, CartItem, CartRepository},
    dashboard::repository::{self as dashboard, AdminStats, CategoryStats, DashboardRepository},
    menu::repository::{self as menu, MenuItem, MenuRepository},
    payment::repository::{self as payment, Payment, PaymentRepository, PaymentStatus},
    review::repository::{self as review, Review, ReviewRepository},
    user::repository::{self as user, Role, User, UserRepository},
};
use crate::utils::database::{DeleteResult, InsertResult, UpdateResult};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::types::BigDecimal;
use std::collections::BTreeMap;
use std::str::FromStr;
use tokio::sync::Mutex;
use ulid::Ulid;

/// In-process store backing the handler tests.
#[derive(Default)]
pub struct MemoryDatabase {
    pub users: Mutex<Vec<User>>,
    pub menu_items: Mutex<Vec<MenuItem>>,
    pub reviews: Mutex<Vec<Review>>,
    pub cart_items: Mutex<Vec<CartItem>>,
    pub payments: Mutex<Vec<Payment>>,
    failing_cart_deletes: Mutex<bool>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn amount(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw).unwrap()
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert_user_with_role(&self, email: &str, role: Role) -> User {
        let user = User {
            id: Ulid::new().to_string(),
            email: email.to_string(),
            name: None,
            role,
            photo: None,
            created_at: now(),
        };
        self.users.lock().await.push(user.clone());
        user
    }

    pub async fn insert_admin(&self, email: &str) -> User {
        self.insert_user_with_role(email, Role::Admin).await
    }

    pub async fn insert_user(&self, email: &str) -> User {
        self.insert_user_with_role(email, Role::Default).await
    }

    pub async fn insert_review(&self, name: &str, rating: i32) -> Review {
        let review = Review {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            details: format!("{} liked it", name),
            rating,
            created_at: now(),
        };
        self.reviews.lock().await.push(review.clone());
        review
    }

    pub async fn insert_menu_item(&self, name: &str, category: &str, price: &str) -> MenuItem {
        let item = MenuItem {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: amount(price),
            recipe: String::new(),
            image: None,
            created_at: now(),
        };
        self.menu_items.lock().await.push(item.clone());
        item
    }

    pub async fn insert_cart_item(&self, item: &str, email: &str) -> CartItem {
        let cart_item = CartItem {
            id: Ulid::new().to_string(),
            item: item.to_string(),
            email: email.to_string(),
            name: None,
            image: None,
            price: None,
            created_at: now(),
        };
        self.cart_items.lock().await.push(cart_item.clone());
        cart_item
    }

    pub async fn insert_payment(&self, email: &str, price: &str, menu_item_ids: &[&str]) -> Payment {
        let payment = Payment {
            id: Ulid::new().to_string(),
            email: email.to_string(),
            price: amount(price),
            transaction_id: None,
            cart_ids: vec![],
            menu_item_ids: menu_item_ids.iter().map(|id| id.to_string()).collect(),
            status: PaymentStatus::Pending,
            created_at: now(),
        };
        self.payments.lock().await.push(payment.clone());
        payment
    }

    /// Makes every later bulk cart delete fail.
    pub async fn fail_cart_deletes(&self) {
        *self.failing_cart_deletes.lock().await = true;
    }
}

#[async_trait]
impl UserRepository for MemoryDatabase {
    async fn create_user(
        &self,
        payload: user::CreateUserPayload,
    ) -> Result<Option<InsertResult>, user::Error> {
        let mut users = self.users.lock().await;
        if users.iter().any(|user| user.email == payload.email) {
            return Ok(None);
        }

        let id = Ulid::new().to_string();
        users.push(User {
            id: id.clone(),
            email: payload.email,
            name: payload.name,
            role: Role::Default,
            photo: payload.photo,
            created_at: now(),
        });
        Ok(Some(InsertResult::new(id)))
    }

    async fn find_users(&self) -> Result<Vec<User>, user::Error> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_user_by_id(&self, id: String) -> Result<Option<User>, user::Error> {
        Ok(self.users.lock().await.iter().find(|user| user.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: String) -> Result<Option<User>, user::Error> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn update_user_by_id(
        &self,
        id: String,
        payload: user::UpdateUserPayload,
    ) -> Result<UpdateResult, user::Error> {
        let mut users = self.users.lock().await;
        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Ok(UpdateResult::new(0));
        };

        if let Some(name) = payload.name {
            user.name = Some(name);
        }
        if let Some(photo) = payload.photo {
            user.photo = Some(photo);
        }
        Ok(UpdateResult::new(1))
    }

    async fn set_user_role_by_id(&self, id: String, role: Role) -> Result<UpdateResult, user::Error> {
        let mut users = self.users.lock().await;
        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Ok(UpdateResult::new(0));
        };

        user.role = role;
        Ok(UpdateResult::new(1))
    }

    async fn delete_user_by_id(&self, id: String) -> Result<DeleteResult, user::Error> {
        let mut users = self.users.lock().await;
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(DeleteResult::new((before - users.len()) as u64))
    }
}

#[async_trait]
impl MenuRepository for MemoryDatabase {
    async fn create_menu_item(
        &self,
        payload: menu::CreateMenuItemPayload,
    ) -> Result<InsertResult, menu::Error> {
        let id = Ulid::new().to_string();
        self.menu_items.lock().await.push(MenuItem {
            id: id.clone(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            recipe: payload.recipe,
            image: payload.image,
            created_at: now(),
        });
        Ok(InsertResult::new(id))
    }

    async fn find_menu_items(&self) -> Result<Vec<MenuItem>, menu::Error> {
        let mut items = self.menu_items.lock().await.clone();
        items.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        Ok(items)
    }

    async fn find_menu_item_by_id(&self, id: String) -> Result<Option<MenuItem>, menu::Error> {
        Ok(self
            .menu_items
            .lock()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn update_menu_item_by_id(
        &self,
        id: String,
        payload: menu::UpdateMenuItemPayload,
    ) -> Result<UpdateResult, menu::Error> {
        let mut items = self.menu_items.lock().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(UpdateResult::new(0));
        };

        if let Some(name) = payload.name {
            item.name = name;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(price) = payload.price {
            item.price = price;
        }
        if let Some(recipe) = payload.recipe {
            item.recipe = recipe;
        }
        if let Some(image) = payload.image {
            item.image = Some(image);
        }
        Ok(UpdateResult::new(1))
    }

    async fn delete_menu_item_by_id(&self, id: String) -> Result<DeleteResult, menu::Error> {
        let mut items = self.menu_items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(DeleteResult::new((before - items.len()) as u64))
    }
}

#[async_trait]
impl ReviewRepository for MemoryDatabase {
    async fn find_reviews(&self) -> Result<Vec<Review>, review::Error> {
        let mut reviews = self.reviews.lock().await.clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}

#[async_trait]
impl CartRepository for MemoryDatabase {
    async fn create_cart_item(
        &self,
        payload: cart::CreateCartItemPayload,
    ) -> Result<InsertResult, cart::Error> {
        let id = Ulid::new().to_string();
        self.cart_items.lock().await.push(CartItem {
            id: id.clone(),
            item: payload.item,
            email: payload.email,
            name: payload.name,
            image: payload.image,
            price: payload.price,
            created_at: now(),
        });
        Ok(InsertResult::new(id))
    }

    async fn find_cart_items_by_email(&self, email: String) -> Result<Vec<CartItem>, cart::Error> {
        Ok(self
            .cart_items
            .lock()
            .await
            .iter()
            .filter(|item| item.email == email)
            .cloned()
            .collect())
    }

    async fn delete_cart_item_by_id(&self, id: String) -> Result<DeleteResult, cart::Error> {
        let mut items = self.cart_items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(DeleteResult::new((before - items.len()) as u64))
    }

    async fn delete_cart_items_by_ids(&self, ids: Vec<String>) -> Result<DeleteResult, cart::Error> {
        if *self.failing_cart_deletes.lock().await {
            return Err(cart::Error::UnexpectedError);
        }

        let mut items = self.cart_items.lock().await;
        let before = items.len();
        items.retain(|item| !ids.contains(&item.id));
        Ok(DeleteResult::new((before - items.len()) as u64))
    }
}

#[async_trait]
impl PaymentRepository for MemoryDatabase {
    async fn create_payment(
        &self,
        payload: payment::CreatePaymentPayload,
    ) -> Result<InsertResult, payment::Error> {
        let id = Ulid::new().to_string();
        self.payments.lock().await.push(Payment {
            id: id.clone(),
            email: payload.email,
            price: payload.price,
            transaction_id: payload.transaction_id,
            cart_ids: payload.cart_ids,
            menu_item_ids: payload.menu_item_ids,
            status: payload.status,
            created_at: now(),
        });
        Ok(InsertResult::new(id))
    }

    async fn find_payments(&self, email: Option<String>) -> Result<Vec<Payment>, payment::Error> {
        let mut payments: Vec<Payment> = self
            .payments
            .lock()
            .await
            .iter()
            .filter(|payment| email.as_ref().map_or(true, |email| &payment.email == email))
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }

    async fn update_payment_status_by_id(
        &self,
        id: String,
        status: PaymentStatus,
    ) -> Result<UpdateResult, payment::Error> {
        let mut payments = self.payments.lock().await;
        let Some(payment) = payments.iter_mut().find(|payment| payment.id == id) else {
            return Ok(UpdateResult::new(0));
        };

        payment.status = status;
        Ok(UpdateResult::new(1))
    }
}

#[async_trait]
impl DashboardRepository for MemoryDatabase {
    async fn get_admin_stats(&self) -> Result<AdminStats, dashboard::Error> {
        let payments = self.payments.lock().await;

        Ok(AdminStats {
            users: self.users.lock().await.len() as i64,
            menu_items: self.menu_items.lock().await.len() as i64,
            orders: payments.len() as i64,
            revenue: payments
                .iter()
                .fold(BigDecimal::from(0), |total, payment| total + &payment.price),
        })
    }

    async fn get_order_stats(&self) -> Result<Vec<CategoryStats>, dashboard::Error> {
        let payments = self.payments.lock().await;
        let menu_items = self.menu_items.lock().await;
        let mut categories: BTreeMap<String, (i64, BigDecimal)> = BTreeMap::new();

        for menu_item_id in payments.iter().flat_map(|payment| &payment.menu_item_ids) {
            let Some(item) = menu_items.iter().find(|item| &item.id == menu_item_id) else {
                continue;
            };
            let entry = categories
                .entry(item.category.clone())
                .or_insert_with(|| (0, BigDecimal::from(0)));
            entry.0 += 1;
            entry.1 = &entry.1 + &item.price;
        }

        Ok(categories
            .into_iter()
            .map(|(category, (quantity, revenue))| CategoryStats {
                category,
                quantity,
                revenue,
            })
            .collect())
    }
}
