mod decision_json;
