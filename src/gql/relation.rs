//! Field constructors for sea-orm relations.
//!
//! Each constructor builds a [`Field`] for an object type backed by a sea-orm
//! model `M`. Resolving the field runs one query for the related entity `R`
//! on the database handle of the current [`RequestContext`](super::RequestContext)
//! and returns the rows as `R::Model` values, so the related object type can
//! resolve its own fields by downcasting them.
//!
//! ```ignore
//! Object::new("Article")
//!     .field(relation::parent::<article::Model, user::Entity>("user"))
//!     .field(relation::siblings::<article::Model, tag::Entity>("tags"));
//! ```
//!
//! Nothing is cached or batched: every resolution of a field on every parent
//! record issues its own query.

use std::sync::Arc;

use async_graphql::ErrorExtensions;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, TypeRef};
use sea_orm::{EntityName, EntityTrait, ModelTrait, Related, Select};

use super::error::GqlError;

/// A model exposed as a GraphQL object type.
pub trait Record: Send + Sync + 'static {
	/// The name of the object type rows of this model resolve to
	const TYPE_NAME: &'static str;
}

/// The shape of a relation, which decides the field type and how an empty
/// result is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
	/// One-to-many, from the referenced side: `[T!]!`
	Children,
	/// Many-to-many through a junction entity: `[T!]!`
	Siblings,
	/// Required many-to-one or one-to-one: `T!`, a missing row is an error
	Parent,
	/// Nullable many-to-one or one-to-one: `T`
	OptionalParent,
	/// One-to-one from the referenced side: `T`
	OptionalChild,
}

impl Kind {
	pub fn type_ref(self, type_name: &str) -> TypeRef {
		match self {
			Kind::Children | Kind::Siblings => TypeRef::named_nn_list_nn(type_name),
			Kind::Parent => TypeRef::named_nn(type_name),
			Kind::OptionalParent | Kind::OptionalChild => TypeRef::named(type_name),
		}
	}
}

type Accessor<M, R> = Arc<dyn Fn(&M) -> Select<R> + Send + Sync>;

/// A relation of `M` described by its kind and a callback that builds the
/// query for the related rows.
pub struct Relationship<M, R>
where
	R: EntityTrait,
{
	kind: Kind,
	accessor: Accessor<M, R>,
}

impl<M, R> Clone for Relationship<M, R>
where
	R: EntityTrait,
{
	fn clone(&self) -> Self {
		Self {
			kind: self.kind,
			accessor: self.accessor.clone(),
		}
	}
}

impl<M, R> Relationship<M, R>
where
	M: Send + Sync + 'static,
	R: EntityTrait,
	R::Model: Record,
{
	pub fn new<F>(kind: Kind, accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self {
			kind,
			accessor: Arc::new(accessor),
		}
	}

	pub fn children<F>(accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self::new(Kind::Children, accessor)
	}

	pub fn siblings<F>(accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self::new(Kind::Siblings, accessor)
	}

	pub fn parent<F>(accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self::new(Kind::Parent, accessor)
	}

	pub fn optional_parent<F>(accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self::new(Kind::OptionalParent, accessor)
	}

	pub fn optional_child<F>(accessor: F) -> Self
	where
		F: Fn(&M) -> Select<R> + Send + Sync + 'static,
	{
		Self::new(Kind::OptionalChild, accessor)
	}

	/// Builds the schema field named `name` for this relation.
	pub fn field(self, name: impl Into<String>) -> Field {
		let name = name.into();
		let type_ref = self.kind.type_ref(<R::Model as Record>::TYPE_NAME);
		let field_name = name.clone();
		let Relationship {
			kind,
			accessor,
		} = self;
		Field::new(name, type_ref, move |ctx| {
			let accessor = accessor.clone();
			let field_name = field_name.clone();
			FieldFuture::new(async move {
				let model = ctx.parent_value.try_downcast_ref::<M>()?;
				let db = super::context(&ctx)?.db();
				trace!(field = %field_name, ?kind, "resolving relationship");
				let select = accessor(model);
				match kind {
					Kind::Children | Kind::Siblings => {
						let rows = select.all(db).await.map_err(|e| GqlError::from(e).extend())?;
						Ok(Some(FieldValue::list(rows.into_iter().map(FieldValue::owned_any))))
					}
					Kind::Parent => {
						let row = select.one(db).await.map_err(|e| GqlError::from(e).extend())?;
						match row {
							Some(row) => Ok(Some(FieldValue::owned_any(row))),
							None => {
								let table = R::default().table_name().to_owned();
								Err(GqlError::NotFound(format!("{table} for `{field_name}`")).extend())
							}
						}
					}
					Kind::OptionalParent | Kind::OptionalChild => {
						let row = select.one(db).await.map_err(|e| GqlError::from(e).extend())?;
						Ok(row.map(FieldValue::owned_any))
					}
				}
			})
		})
	}
}

/// A one-to-many field listing the rows of `R` that reference `M`.
pub fn children<M, R>(name: impl Into<String>) -> Field
where
	M: ModelTrait + Send + Sync + 'static,
	M::Entity: Related<R>,
	R: EntityTrait,
	R::Model: Record,
{
	Relationship::<M, R>::children(|model: &M| model.find_related(R::default())).field(name)
}

/// A many-to-many field listing the rows of `R` joined to `M` through the
/// junction entity named by `Related::via`.
pub fn siblings<M, R>(name: impl Into<String>) -> Field
where
	M: ModelTrait + Send + Sync + 'static,
	M::Entity: Related<R>,
	R: EntityTrait,
	R::Model: Record,
{
	Relationship::<M, R>::siblings(|model: &M| model.find_related(R::default())).field(name)
}

/// A non-null field holding the row of `R` that `M` references.
pub fn parent<M, R>(name: impl Into<String>) -> Field
where
	M: ModelTrait + Send + Sync + 'static,
	M::Entity: Related<R>,
	R: EntityTrait,
	R::Model: Record,
{
	Relationship::<M, R>::parent(|model: &M| model.find_related(R::default())).field(name)
}

/// A nullable field holding the row of `R` that `M` may reference.
pub fn optional_parent<M, R>(name: impl Into<String>) -> Field
where
	M: ModelTrait + Send + Sync + 'static,
	M::Entity: Related<R>,
	R: EntityTrait,
	R::Model: Record,
{
	Relationship::<M, R>::optional_parent(|model: &M| model.find_related(R::default())).field(name)
}

/// A nullable field holding the single row of `R` that references `M`, if any.
pub fn optional_child<M, R>(name: impl Into<String>) -> Field
where
	M: ModelTrait + Send + Sync + 'static,
	M::Entity: Related<R>,
	R: EntityTrait,
	R::Model: Record,
{
	Relationship::<M, R>::optional_child(|model: &M| model.find_related(R::default())).field(name)
}
