//! Postgres-backed store. Owns the schema and the write path used by the
//! administrative tooling; the evaluator only sees the read methods
//! through [`CampaignStore`].

use crate::CampaignStore;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use targeting_core::config::DatabaseConfig;
use targeting_core::types::{Campaign, TargetingRule};
use targeting_core::{TargetingError, TargetingResult};
use tracing::info;

pub struct PostgresStore {
    pool: PgPool,
}

fn db_err(e: sqlx::Error) -> TargetingError {
    TargetingError::Store(e.to_string())
}

fn campaign_from_row(row: &PgRow) -> TargetingResult<Campaign> {
    let status: String = row.try_get("status").map_err(db_err)?;
    Ok(Campaign {
        id: row.try_get("id").map_err(db_err)?,
        name: row.try_get("name").map_err(db_err)?,
        image_url: row.try_get("image_url").map_err(db_err)?,
        cta: row.try_get("cta").map_err(db_err)?,
        status: status.parse()?,
    })
}

fn rule_from_row(row: &PgRow) -> TargetingResult<TargetingRule> {
    let dimension: String = row.try_get("dimension_type").map_err(db_err)?;
    let kind: String = row.try_get("rule_type").map_err(db_err)?;
    Ok(TargetingRule {
        campaign_id: row.try_get("campaign_id").map_err(db_err)?,
        dimension: dimension.parse()?,
        kind: kind.parse()?,
        values: row.try_get("values").map_err(db_err)?,
    })
}

impl PostgresStore {
    /// Connect to Postgres and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> TargetingResult<Self> {
        info!(url = %config.url, "Connecting to Postgres");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(db_err)?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> TargetingResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS campaigns (
                id VARCHAR(255) PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                image_url VARCHAR(255) NOT NULL,
                cta VARCHAR(255) NOT NULL,
                status VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        // campaign_id + dimension is the natural key: a campaign carries
        // at most one rule per dimension.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS targeting_rules (
                campaign_id VARCHAR(255) NOT NULL,
                dimension_type VARCHAR(255) NOT NULL,
                rule_type VARCHAR(255) NOT NULL,
                "values" TEXT[] NOT NULL,
                PRIMARY KEY (campaign_id, dimension_type),
                FOREIGN KEY (campaign_id) REFERENCES campaigns(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    pub async fn campaign_by_id(&self, id: &str) -> TargetingResult<Option<Campaign>> {
        let row = sqlx::query(
            "SELECT id, name, image_url, cta, status FROM campaigns WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(campaign_from_row).transpose()
    }

    /// Insert or update a campaign. This is the administrative write
    /// path; the delivery path never mutates.
    pub async fn upsert_campaign(&self, campaign: &Campaign) -> TargetingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO campaigns (id, name, image_url, cta, status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = $2, image_url = $3, cta = $4, status = $5
            "#,
        )
        .bind(&campaign.id)
        .bind(&campaign.name)
        .bind(&campaign.image_url)
        .bind(&campaign.cta)
        .bind(campaign.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    pub async fn upsert_rule(&self, rule: &TargetingRule) -> TargetingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO targeting_rules (campaign_id, dimension_type, rule_type, "values")
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (campaign_id, dimension_type) DO UPDATE
            SET rule_type = $3, "values" = $4
            "#,
        )
        .bind(&rule.campaign_id)
        .bind(rule.dimension.as_str())
        .bind(rule.kind.as_str())
        .bind(&rule.values)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    /// Upsert the demo campaigns and rules. Development only.
    pub async fn seed_demo_data(&self) -> TargetingResult<()> {
        for campaign in crate::seed::demo_campaigns() {
            self.upsert_campaign(&campaign).await?;
        }
        for rule in crate::seed::demo_rules() {
            self.upsert_rule(&rule).await?;
        }
        info!("Demo data seeded");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CampaignStore for PostgresStore {
    async fn campaigns(&self) -> TargetingResult<Vec<Campaign>> {
        let rows = sqlx::query("SELECT id, name, image_url, cta, status FROM campaigns")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(campaign_from_row).collect()
    }

    async fn targeting_rules(&self) -> TargetingResult<Vec<TargetingRule>> {
        let rows = sqlx::query(
            r#"SELECT campaign_id, dimension_type, rule_type, "values" FROM targeting_rules"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(rule_from_row).collect()
    }
}
