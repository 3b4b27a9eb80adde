use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use asset_declaration::registry::{
    ConfigResponse, DeclarationCountResponse, DeclarationExistenceResponse, DeclarationResponse,
    DeclarationUpdateResponse, ExecuteMsg, InstantiateMsg, LatestDeclarationIdResponse,
    MigrateMsg, QueryMsg,
};
use declaration_registry::state::{Config, Declaration, DeclarationUpdate};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(Declaration), &out_dir);
    export_schema(&schema_for!(DeclarationUpdate), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(DeclarationResponse), &out_dir);
    export_schema(&schema_for!(DeclarationUpdateResponse), &out_dir);
    export_schema(&schema_for!(DeclarationCountResponse), &out_dir);
    export_schema(&schema_for!(DeclarationExistenceResponse), &out_dir);
    export_schema(&schema_for!(LatestDeclarationIdResponse), &out_dir);
}
