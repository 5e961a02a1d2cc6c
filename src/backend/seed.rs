/**
 * Catalog Seeding
 *
 * Idempotent upserts of the canonical module set, language bundles, and
 * themes. Runs on every startup; re-seeding an already-seeded database is
 * a no-op except for picking up changed catalog content.
 */

use serde_json::json;
use sqlx::SqlitePool;

struct ModuleSeed {
    name: &'static str,
    path: &'static str,
    enabled: bool,
    permissions: serde_json::Value,
    properties: serde_json::Value,
    sort_order: i64,
}

fn module_seeds() -> Vec<ModuleSeed> {
    vec![
        ModuleSeed {
            name: "home",
            path: "/home",
            enabled: true,
            permissions: json!(["user", "admin"]),
            properties: json!([
                { "id": "welcome-banner", "globalLabel": "global.pages.home.property.welcome-banner", "show": true },
                { "id": "quick-actions", "globalLabel": "global.pages.home.property.quick-actions", "show": true },
                { "id": "recent-activities", "globalLabel": "global.pages.home.property.recent-activities", "show": true },
            ]),
            sort_order: 1,
        },
        ModuleSeed {
            name: "dashboard",
            path: "/dashboard",
            enabled: true,
            permissions: json!(["user", "admin"]),
            properties: json!([
                { "id": "stats-cards", "globalLabel": "global.pages.dashboard.property.stats-cards", "show": true },
                { "id": "charts", "globalLabel": "global.pages.dashboard.property.charts", "show": true },
                { "id": "recent-orders", "globalLabel": "global.pages.dashboard.property.recent-orders", "show": true },
            ]),
            sort_order: 2,
        },
        ModuleSeed {
            name: "profile",
            path: "/profile",
            enabled: true,
            permissions: json!(["user", "admin"]),
            properties: json!([
                { "id": "avatar", "globalLabel": "global.pages.profile.property.avatar", "show": true },
                { "id": "account-details", "globalLabel": "global.pages.profile.property.account-details", "show": true },
            ]),
            sort_order: 3,
        },
        ModuleSeed {
            name: "admin",
            path: "/admin",
            enabled: false,
            permissions: json!(["admin"]),
            properties: json!([
                { "id": "user-management", "globalLabel": "global.pages.admin.property.user-management", "show": true },
                { "id": "system-settings", "globalLabel": "global.pages.admin.property.system-settings", "show": true },
                { "id": "logs", "globalLabel": "global.pages.admin.property.logs", "show": false },
            ]),
            sort_order: 4,
        },
    ]
}

fn language_seeds() -> Vec<(&'static str, &'static str, serde_json::Value)> {
    vec![
        (
            "en-US",
            "English (US)",
            json!({
                "global.pages.home.property.welcome-banner": "Welcome",
                "global.pages.home.property.quick-actions": "Quick Actions",
                "global.pages.home.property.recent-activities": "Recent Activities",
                "global.pages.dashboard.property.stats-cards": "Statistics",
                "global.pages.dashboard.property.charts": "Charts",
                "global.pages.dashboard.property.recent-orders": "Recent Orders",
                "global.pages.profile.property.avatar": "Avatar",
                "global.pages.profile.property.account-details": "Account Details",
                "global.pages.admin.property.user-management": "User Management",
                "global.pages.admin.property.system-settings": "System Settings",
                "global.pages.admin.property.logs": "Logs",
            }),
        ),
        (
            "zh-CN",
            "简体中文",
            json!({
                "global.pages.home.property.welcome-banner": "欢迎",
                "global.pages.home.property.quick-actions": "快捷操作",
                "global.pages.home.property.recent-activities": "最近活动",
                "global.pages.dashboard.property.stats-cards": "统计卡片",
                "global.pages.dashboard.property.charts": "图表",
                "global.pages.dashboard.property.recent-orders": "最近订单",
                "global.pages.profile.property.avatar": "头像",
                "global.pages.profile.property.account-details": "账户详情",
                "global.pages.admin.property.user-management": "用户管理",
                "global.pages.admin.property.system-settings": "系统设置",
                "global.pages.admin.property.logs": "日志",
            }),
        ),
    ]
}

struct ThemeSeed {
    id: &'static str,
    name: &'static str,
    url: &'static str,
    css: &'static str,
    is_default: bool,
}

fn theme_seeds() -> Vec<ThemeSeed> {
    vec![
        ThemeSeed {
            id: "default",
            name: "Default",
            url: "/themes/default.css",
            css: ":root { --bg: #ffffff; --fg: #1f2937; --accent: #2563eb; }",
            is_default: true,
        },
        ThemeSeed {
            id: "dark",
            name: "Dark",
            url: "/themes/dark.css",
            css: ":root { --bg: #111827; --fg: #f9fafb; --accent: #60a5fa; }",
            is_default: false,
        },
    ]
}

/// Upsert the full catalog.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for module in module_seeds() {
        sqlx::query(
            r#"
            INSERT INTO modules (name, path, enabled, permissions, properties, sort_order)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (name) DO UPDATE SET
                path = excluded.path,
                enabled = excluded.enabled,
                permissions = excluded.permissions,
                properties = excluded.properties,
                sort_order = excluded.sort_order
            "#,
        )
        .bind(module.name)
        .bind(module.path)
        .bind(module.enabled)
        .bind(module.permissions.to_string())
        .bind(module.properties.to_string())
        .bind(module.sort_order)
        .execute(pool)
        .await?;
    }

    for (code, name, content) in language_seeds() {
        sqlx::query(
            r#"
            INSERT INTO languages (code, name, content, version, enabled)
            VALUES (?, ?, ?, '1.0.0', 1)
            ON CONFLICT (code) DO UPDATE SET
                name = excluded.name,
                content = excluded.content
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(content.to_string())
        .execute(pool)
        .await?;
    }

    for theme in theme_seeds() {
        sqlx::query(
            r#"
            INSERT INTO themes (id, name, url, css, version, enabled, is_default)
            VALUES (?, ?, ?, ?, '1.0.0', 1, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                url = excluded.url,
                css = excluded.css,
                is_default = excluded.is_default
            "#,
        )
        .bind(theme.id)
        .bind(theme.name)
        .bind(theme.url)
        .bind(theme.css)
        .bind(theme.is_default)
        .execute(pool)
        .await?;
    }

    tracing::info!("Catalog seeded");
    Ok(())
}
