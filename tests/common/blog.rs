//! A small blog data model covering every relation shape.

use sea_orm::{ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Set};

pub mod user {
	use graphql_kit::relation::Record;
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "users")]
	pub struct Model {
		#[sea_orm(primary_key)]
		pub id: i32,
		pub username: String,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {
		#[sea_orm(has_many = "super::article::Entity")]
		Article,
		#[sea_orm(has_one = "super::profile::Entity")]
		Profile,
	}

	impl Related<super::article::Entity> for Entity {
		fn to() -> RelationDef {
			Relation::Article.def()
		}
	}

	impl Related<super::profile::Entity> for Entity {
		fn to() -> RelationDef {
			Relation::Profile.def()
		}
	}

	impl ActiveModelBehavior for ActiveModel {}

	impl Record for Model {
		const TYPE_NAME: &'static str = "User";
	}
}

pub mod article {
	use graphql_kit::relation::Record;
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "articles")]
	pub struct Model {
		#[sea_orm(primary_key)]
		pub id: i32,
		pub title: String,
		pub user_id: i32,
		pub editor_id: Option<i32>,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {
		#[sea_orm(
			belongs_to = "super::user::Entity",
			from = "Column::UserId",
			to = "super::user::Column::Id"
		)]
		User,
		#[sea_orm(
			belongs_to = "super::user::Entity",
			from = "Column::EditorId",
			to = "super::user::Column::Id"
		)]
		Editor,
	}

	impl Related<super::user::Entity> for Entity {
		fn to() -> RelationDef {
			Relation::User.def()
		}
	}

	impl Related<super::tag::Entity> for Entity {
		fn to() -> RelationDef {
			super::article_tag::Relation::Tag.def()
		}

		fn via() -> Option<RelationDef> {
			Some(super::article_tag::Relation::Article.def().rev())
		}
	}

	/// The second relation to `users`, reached through `editor_id`
	#[derive(Debug)]
	pub struct EditorLink;

	impl Linked for EditorLink {
		type FromEntity = Entity;
		type ToEntity = super::user::Entity;

		fn link(&self) -> Vec<RelationDef> {
			vec![Relation::Editor.def()]
		}
	}

	impl ActiveModelBehavior for ActiveModel {}

	impl Record for Model {
		const TYPE_NAME: &'static str = "Article";
	}
}

pub mod profile {
	use graphql_kit::relation::Record;
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "profiles")]
	pub struct Model {
		#[sea_orm(primary_key)]
		pub id: i32,
		pub user_id: Option<i32>,
		pub bio: String,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {
		#[sea_orm(
			belongs_to = "super::user::Entity",
			from = "Column::UserId",
			to = "super::user::Column::Id"
		)]
		User,
	}

	impl Related<super::user::Entity> for Entity {
		fn to() -> RelationDef {
			Relation::User.def()
		}
	}

	impl ActiveModelBehavior for ActiveModel {}

	impl Record for Model {
		const TYPE_NAME: &'static str = "Profile";
	}
}

pub mod tag {
	use graphql_kit::relation::Record;
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "tags")]
	pub struct Model {
		#[sea_orm(primary_key)]
		pub id: i32,
		pub name: String,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {}

	impl Related<super::article::Entity> for Entity {
		fn to() -> RelationDef {
			super::article_tag::Relation::Article.def()
		}

		fn via() -> Option<RelationDef> {
			Some(super::article_tag::Relation::Tag.def().rev())
		}
	}

	impl ActiveModelBehavior for ActiveModel {}

	impl Record for Model {
		const TYPE_NAME: &'static str = "Tag";
	}
}

pub mod article_tag {
	use sea_orm::entity::prelude::*;

	#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
	#[sea_orm(table_name = "article_tags")]
	pub struct Model {
		#[sea_orm(primary_key, auto_increment = false)]
		pub article_id: i32,
		#[sea_orm(primary_key, auto_increment = false)]
		pub tag_id: i32,
	}

	#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
	pub enum Relation {
		#[sea_orm(
			belongs_to = "super::article::Entity",
			from = "Column::ArticleId",
			to = "super::article::Column::Id"
		)]
		Article,
		#[sea_orm(
			belongs_to = "super::tag::Entity",
			from = "Column::TagId",
			to = "super::tag::Column::Id"
		)]
		Tag,
	}

	impl ActiveModelBehavior for ActiveModel {}
}

// No foreign keys, so tests can leave references dangling on purpose
const SCHEMA: &[&str] = &[
	"CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, username TEXT NOT NULL)",
	"CREATE TABLE articles (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, user_id INTEGER NOT NULL, editor_id INTEGER)",
	"CREATE TABLE profiles (id INTEGER PRIMARY KEY AUTOINCREMENT, user_id INTEGER, bio TEXT NOT NULL)",
	"CREATE TABLE tags (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
	"CREATE TABLE article_tags (article_id INTEGER NOT NULL, tag_id INTEGER NOT NULL, PRIMARY KEY (article_id, tag_id))",
];

/// An empty in-memory database with the blog tables.
pub async fn database() -> DatabaseConnection {
	let mut opts = ConnectOptions::new("sqlite::memory:");
	// Every connection to `:memory:` is a separate database
	opts.max_connections(1).min_connections(1).sqlx_logging(false);
	let db = Database::connect(opts).await.unwrap();
	for ddl in SCHEMA {
		db.execute_unprepared(ddl).await.unwrap();
	}
	db
}

pub async fn create_user(db: &DatabaseConnection, username: &str) -> user::Model {
	user::ActiveModel {
		username: Set(username.to_owned()),
		..Default::default()
	}
	.insert(db)
	.await
	.unwrap()
}

pub async fn create_article(
	db: &DatabaseConnection,
	title: &str,
	user_id: i32,
	editor_id: Option<i32>,
) -> article::Model {
	article::ActiveModel {
		title: Set(title.to_owned()),
		user_id: Set(user_id),
		editor_id: Set(editor_id),
		..Default::default()
	}
	.insert(db)
	.await
	.unwrap()
}

pub async fn create_profile(
	db: &DatabaseConnection,
	user_id: Option<i32>,
	bio: &str,
) -> profile::Model {
	profile::ActiveModel {
		user_id: Set(user_id),
		bio: Set(bio.to_owned()),
		..Default::default()
	}
	.insert(db)
	.await
	.unwrap()
}

pub async fn create_tag(db: &DatabaseConnection, name: &str) -> tag::Model {
	tag::ActiveModel {
		name: Set(name.to_owned()),
		..Default::default()
	}
	.insert(db)
	.await
	.unwrap()
}

pub async fn tag_article(db: &DatabaseConnection, article_id: i32, tag_id: i32) {
	article_tag::ActiveModel {
		article_id: Set(article_id),
		tag_id: Set(tag_id),
	}
	.insert(db)
	.await
	.unwrap();
}
